use dioxus::prelude::*;

use forma_domain as domain;

/// Renders one exercise as a card.
///
/// Name and image are shown when the record contains them. All remaining scalar fields are
/// listed as tags.
#[component]
pub fn ResultCard(exercise: domain::Exercise) -> Element {
    let name = exercise.name().unwrap_or("Exercise").to_string();
    let image = exercise.image().map(ToString::to_string);
    let attributes = exercise.attributes();

    rsx! {
        div {
            class: "card",
            if let Some(image) = image {
                div {
                    class: "card-image",
                    figure {
                        class: "image",
                        img { src: "{image}", alt: "{name}", loading: "lazy" }
                    }
                }
            }
            div {
                class: "card-content",
                p { class: "title is-6 is-capitalized", "{name}" }
                div {
                    class: "tags",
                    for (key, value) in attributes {
                        span {
                            class: "tag is-light is-capitalized",
                            title: "{key}",
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}
