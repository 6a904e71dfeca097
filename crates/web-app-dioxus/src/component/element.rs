use dioxus::prelude::*;
use strum::Display;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-1 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

#[component]
pub fn Error(message: String) -> Element {
    rsx! {
        IconText { icon: "triangle-exclamation", text: message, color: Color::Danger }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn NoData(text: Option<String>) -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light",
            {text.unwrap_or("No data".to_string())}
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    class: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            class: if let Some(class) = &class { "{class}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(
    icon: String,
    text: String,
    color: Option<Color>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn Container(children: Element, has_text_centered: Option<bool>) -> Element {
    rsx! {
        div {
            class: "container px-3",
            class: if has_text_centered.unwrap_or_default() { "has-text-centered" },
            {children}
        }
    }
}

#[component]
pub fn Title(title: String, class: Option<String>) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container",
                h1 {
                    class: "title is-5",
                    class: if let Some(c) = &class { "{c}" },
                    "{title}"
                }
            }
        }
    }
}

#[component]
pub fn SearchBox(
    search_term: String,
    placeholder: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "control has-icons-left is-flex-grow-1",
            span {
                class: "icon is-left",
                i { class: "fas fa-search" }
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: if let Some(placeholder) = placeholder { placeholder },
                value: search_term,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// A tag with a delete button, used for removable selections.
#[component]
pub fn DeletableTag(
    text: String,
    color: Option<Color>,
    ondelete: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        span {
            class: "tag is-medium",
            class: if let Some(color) = color { "is-{color}" },
            {text}
            button {
                class: "delete is-small",
                aria_label: "remove",
                onclick: move |evt| ondelete.call(evt),
            }
        }
    }
}
