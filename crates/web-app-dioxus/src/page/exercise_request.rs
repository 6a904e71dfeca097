use dioxus::prelude::*;
use log::warn;

use forma_domain::{self as domain, Command, FormState, Msg};

use crate::{
    DOMAIN_SERVICE, config,
    component::{
        element::{Color, Container, DeletableTag, Icon, NoData, SearchBox, Title},
        form::{DropdownField, InputField, SubmitButton},
        result_card::ResultCard,
    },
};

const RESULT_SECTION_ID: &str = "result-section";

#[derive(Clone, Copy, PartialEq)]
struct FormSignals {
    state: Signal<FormState>,
    scroll_requested: Signal<bool>,
}

#[component]
pub fn ExerciseRequest() -> Element {
    let form_state = FormSignals {
        state: use_signal(|| FormState::new(config().body_parts.clone())),
        scroll_requested: use_signal(|| false),
    };
    let mut scroll_requested = form_state.scroll_requested;
    // Effects run after the DOM has been updated, so the results are already rendered.
    use_effect(move || {
        if scroll_requested() {
            scroll_requested.set(false);
            scroll_to_results();
        }
    });
    let state = form_state.state.read();

    rsx! {
        Container {
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    dispatch(form_state, Msg::Submitted);
                },
                EquipmentSearch { form_state }
                DropdownField {
                    label: "Body part",
                    placeholder: "Select body part",
                    options: state.body_parts().iter().map(ToString::to_string).collect::<Vec<_>>(),
                    selected: state.body_part().map(ToString::to_string),
                    is_open: state.is_body_part_list_shown(),
                    ontoggle: move |_| dispatch(form_state, Msg::BodyPartListToggled),
                    onselect: move |label: String| {
                        match domain::BodyPart::new(&label) {
                            Ok(body_part) => dispatch(form_state, Msg::BodyPartSelected(body_part)),
                            Err(err) => warn!("ignored body part selection: {err}"),
                        }
                    },
                }
                InputField {
                    label: "Count",
                    r#type: "number",
                    inputmode: "numeric",
                    min: "1",
                    value: state.count().to_string(),
                    oninput: move |evt: FormEvent| dispatch(form_state, Msg::CountChanged(evt.value())),
                }
                if let Some(error) = state.error() {
                    p { class: "help is-danger has-text-centered is-size-6 mb-3", "{error}" }
                }
                SubmitButton {
                    text: "Get Exercises",
                    loading_text: "Getting Exercises",
                    is_loading: state.is_loading(),
                }
            }
        }
        section {
            id: RESULT_SECTION_ID,
            class: "section px-0",
            if !state.exercises().is_empty() {
                Title { title: "Your Exercises" }
                div {
                    class: "grid is-col-min-10",
                    for (i, exercise) in state.exercises().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "cell",
                            ResultCard { exercise: exercise.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EquipmentSearch(form_state: FormSignals) -> Element {
    let state = form_state.state.read();

    rsx! {
        div {
            class: "field",
            label { class: "label", "Equipment" }
            div {
                class: "box p-3 mb-3",
                if state.selected_equipment().is_empty() {
                    NoData { text: "Select equipment by searching below" }
                } else {
                    div {
                        class: "tags",
                        for equipment in state.selected_equipment() {
                            DeletableTag {
                                key: "{equipment.name}",
                                text: equipment.name.clone(),
                                color: Color::Link,
                                ondelete: {
                                    let name = equipment.name.clone();
                                    move |_| dispatch(form_state, Msg::EquipmentRemoved(name.clone()))
                                },
                            }
                        }
                    }
                }
            }
            SearchBox {
                search_term: state.search_text().to_string(),
                placeholder: "Search equipment",
                oninput: move |evt: FormEvent| dispatch(form_state, Msg::SearchTextChanged(evt.value())),
            }
            if !state.search_results().is_empty() {
                div {
                    class: "panel mt-2",
                    for equipment in state.search_results() {
                        a {
                            key: "{equipment.name}",
                            class: "panel-block",
                            onclick: {
                                let equipment = equipment.clone();
                                move |_| dispatch(form_state, Msg::EquipmentSelected(equipment.clone()))
                            },
                            if equipment.image.is_empty() {
                                Icon { name: "dumbbell", class: "panel-icon" }
                            } else {
                                figure {
                                    class: "image is-32x32 mr-3",
                                    img { src: "{equipment.image}", alt: "{equipment.name}" }
                                }
                            }
                            span { class: "is-capitalized", "{equipment.name}" }
                        }
                    }
                }
            }
        }
    }
}

/// Applies a message to the form and carries out the resulting command.
fn dispatch(mut form_state: FormSignals, msg: Msg) {
    let (state, command) = form_state.state.peek().clone().update(msg);
    form_state.state.set(state);
    if let Some(command) = command {
        execute(form_state, command);
    }
}

fn execute(mut form_state: FormSignals, command: Command) {
    if matches!(command, Command::ScrollToResults) {
        form_state.scroll_requested.set(true);
        return;
    }
    spawn(async move {
        let msg = domain::form::perform(command, &*DOMAIN_SERVICE.read()).await;
        if let Some(msg) = msg {
            dispatch(form_state, msg);
        }
    });
}

fn scroll_to_results() {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULT_SECTION_ID))
    {
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
