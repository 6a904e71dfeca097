use dioxus::prelude::*;

use crate::component::element::Icon;

#[component]
pub fn InputField(
    label: Option<String>,
    r#type: Option<String>,
    inputmode: Option<String>,
    min: Option<String>,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label { label { class: "label", "{label}" } }
            div {
                class: "control",
                input {
                    class: "input",
                    r#type: if let Some(r#type) = r#type { r#type } else { "text" },
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    min: if let Some(min) = min { min },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

/// A single-choice list that unfolds below its header.
///
/// The header shows the selected option or the placeholder. The arrow icon points up while the
/// list is shown.
#[component]
pub fn DropdownField(
    label: String,
    placeholder: String,
    options: Vec<String>,
    selected: Option<String>,
    is_open: bool,
    ontoggle: EventHandler<MouseEvent>,
    onselect: EventHandler<String>,
) -> Element {
    let arrow_class = if is_open { "is-rotated" } else { "" };
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "dropdown is-block",
                class: if is_open { "is-active" },
                div {
                    class: "dropdown-trigger",
                    button {
                        class: "button is-fullwidth is-justify-content-space-between",
                        aria_haspopup: "true",
                        r#type: "button",
                        onclick: move |evt| ontoggle.call(evt),
                        span {
                            class: if selected.is_none() { "has-text-grey" },
                            if let Some(selected) = &selected { "{selected}" } else { "{placeholder}" }
                        }
                        Icon {
                            name: "angle-down",
                            is_small: true,
                            class: arrow_class,
                        }
                    }
                }
                div {
                    class: "dropdown-menu is-fullwidth",
                    role: "menu",
                    div {
                        class: "dropdown-content",
                        for option in options {
                            a {
                                class: "dropdown-item",
                                class: if selected.as_ref() == Some(&option) { "is-active" },
                                onclick: {
                                    let option = option.clone();
                                    move |_| onselect.call(option.clone())
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubmitButton(text: String, loading_text: String, is_loading: bool) -> Element {
    rsx! {
        div {
            class: "field is-grouped is-grouped-centered",
            div {
                class: "control",
                button {
                    class: "button is-primary",
                    class: if is_loading { "is-dimmed" },
                    r#type: "submit",
                    if is_loading {
                        Icon { name: "spinner fa-pulse" }
                        span { "{loading_text}" }
                    } else {
                        span { "{text}" }
                    }
                }
            }
        }
    }
}
