use dioxus::prelude::*;

use forma_web_app::log::Service;

use crate::{
    WEB_APP_SERVICE,
    component::element::{Color, Container, Error, Icon, Message, NoData, Title},
};

#[component]
pub fn Log() -> Element {
    let mut refresh = use_signal(|| 0_usize);
    let _ = refresh.read();
    let entries = WEB_APP_SERVICE.read().get_log_entries();

    rsx! {
        Title { title: "Log" }
        Container {
            match entries {
                Ok(entries) if entries.is_empty() => rsx! {
                    NoData { text: "No log entries" }
                },
                Ok(entries) => rsx! {
                    for entry in entries {
                        Message {
                            color: match entry.level {
                                log::Level::Error => Color::Danger,
                                log::Level::Warn => Color::Warning,
                                log::Level::Info => Color::Primary,
                                log::Level::Debug => Color::Info,
                                log::Level::Trace => Color::Dark,
                            },
                            p { class: "is-size-7", {entry.time} }
                            p { "{entry.message}" }
                        }
                    }
                    div {
                        class: "field is-grouped is-grouped-centered mt-4",
                        div {
                            class: "control",
                            button {
                                class: "button",
                                onclick: move |_| {
                                    if let Err(err) = WEB_APP_SERVICE.read().clear_log_entries() {
                                        log::error!("failed to clear log: {err}");
                                    }
                                    *refresh.write() += 1;
                                },
                                Icon { name: "trash" }
                                span { "Clear log" }
                            }
                        }
                    }
                },
                Err(err) => rsx! {
                    Error { message: err.to_string() }
                },
            }
        }
    }
}
