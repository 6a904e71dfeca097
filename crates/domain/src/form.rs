//! Exercise request form
//!
//! The form is a single state value that is only changed by [`FormState::update`]. Every user
//! interaction and every completed request is passed in as a [`Msg`]. Requests are not executed
//! by the form itself. Instead, `update` returns a [`Command`] which the caller carries out
//! (e.g. with [`perform`]) and whose outcome is fed back as another `Msg`.
//!
//! Each request carries a [`Generation`]. A completion is only accepted if its generation is the
//! one of the most recently issued request of the same kind.

use log::debug;

use crate::{
    BodyPart, BodyParts, Equipment, EquipmentService, Exercise, ExerciseQuery, ExerciseService,
    ReadError, SelectedEquipment,
};

pub const DEFAULT_COUNT: &str = "1";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u64> for Generation {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading { generation: Generation },
    Success,
    Error(FormError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("please select any body part")]
    MissingBodyPart,
    #[error("please select a valid body part ({0} is not available)")]
    UnknownBodyPart(String),
    #[error("please specify count")]
    MissingCount,
    #[error("sorry! we couldn't find any exercises")]
    NoExercisesFound,
    #[error("Failed to fetch exercises")]
    FetchFailed,
}

#[derive(Debug)]
pub enum Msg {
    SearchTextChanged(String),
    EquipmentSearchCompleted(Generation, Result<Vec<Equipment>, ReadError>),
    EquipmentSelected(Equipment),
    EquipmentRemoved(String),
    BodyPartListToggled,
    BodyPartSelected(BodyPart),
    CountChanged(String),
    Submitted,
    ExerciseSearchCompleted(Generation, Result<Vec<Exercise>, ReadError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SearchEquipments {
        generation: Generation,
        name: String,
    },
    SearchExercises {
        generation: Generation,
        query: ExerciseQuery,
    },
    ScrollToResults,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    body_parts: BodyParts,
    search_text: String,
    search_results: Vec<Equipment>,
    selected_equipment: SelectedEquipment,
    body_part: Option<BodyPart>,
    body_part_list_shown: bool,
    count: String,
    exercises: Vec<Exercise>,
    status: Status,
    equipment_generation: Generation,
    exercise_generation: Generation,
    pending_exercise_search: Option<Generation>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(BodyParts::default())
    }
}

impl FormState {
    #[must_use]
    pub fn new(body_parts: BodyParts) -> Self {
        Self {
            body_parts,
            search_text: String::new(),
            search_results: vec![],
            selected_equipment: SelectedEquipment::new(),
            body_part: None,
            body_part_list_shown: false,
            count: DEFAULT_COUNT.to_string(),
            exercises: vec![],
            status: Status::Idle,
            equipment_generation: Generation::default(),
            exercise_generation: Generation::default(),
            pending_exercise_search: None,
        }
    }

    #[must_use]
    pub fn body_parts(&self) -> &BodyParts {
        &self.body_parts
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn search_results(&self) -> &[Equipment] {
        &self.search_results
    }

    #[must_use]
    pub fn selected_equipment(&self) -> &SelectedEquipment {
        &self.selected_equipment
    }

    #[must_use]
    pub fn body_part(&self) -> Option<&BodyPart> {
        self.body_part.as_ref()
    }

    #[must_use]
    pub fn is_body_part_list_shown(&self) -> bool {
        self.body_part_list_shown
    }

    #[must_use]
    pub fn count(&self) -> &str {
        &self.count
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&FormError> {
        match &self.status {
            Status::Error(error) => Some(error),
            Status::Idle | Status::Loading { .. } | Status::Success => None,
        }
    }

    /// Checks the inputs required for an exercise search.
    ///
    /// A missing body part is reported before a missing count.
    pub fn validate(&self) -> Result<ExerciseQuery, FormError> {
        let Some(body_part) = &self.body_part else {
            return Err(FormError::MissingBodyPart);
        };
        if !self.body_parts.contains(body_part) {
            return Err(FormError::UnknownBodyPart(body_part.to_string()));
        }
        if self.count.trim().is_empty() {
            return Err(FormError::MissingCount);
        }
        Ok(ExerciseQuery::new(
            body_part.clone(),
            &self.count,
            &self.selected_equipment,
        ))
    }

    #[must_use]
    pub fn update(mut self, msg: Msg) -> (Self, Option<Command>) {
        let command = match msg {
            Msg::SearchTextChanged(text) => {
                self.equipment_generation = self.equipment_generation.next();
                self.search_text = text;
                if self.search_text.is_empty() {
                    self.search_results.clear();
                    None
                } else {
                    Some(Command::SearchEquipments {
                        generation: self.equipment_generation,
                        name: self.search_text.clone(),
                    })
                }
            }
            Msg::EquipmentSearchCompleted(generation, result) => {
                if generation == self.equipment_generation {
                    match result {
                        Ok(equipments) => {
                            self.search_results =
                                self.selected_equipment.without_selected(equipments);
                        }
                        Err(err) => {
                            debug!("ignoring failed equipment search: {err}");
                        }
                    }
                } else {
                    debug!("discarding outdated equipment search result");
                }
                None
            }
            Msg::EquipmentSelected(equipment) => {
                self.selected_equipment.insert(equipment);
                self.clear_search();
                None
            }
            Msg::EquipmentRemoved(name) => {
                self.selected_equipment.remove(&name);
                None
            }
            Msg::BodyPartListToggled => {
                self.body_part_list_shown = !self.body_part_list_shown;
                None
            }
            Msg::BodyPartSelected(body_part) => {
                self.body_part = Some(body_part);
                self.body_part_list_shown = false;
                None
            }
            Msg::CountChanged(count) => {
                self.count = count;
                None
            }
            Msg::Submitted => match self.validate() {
                Ok(query) => {
                    self.exercise_generation = self.exercise_generation.next();
                    self.pending_exercise_search = Some(self.exercise_generation);
                    self.status = Status::Loading {
                        generation: self.exercise_generation,
                    };
                    Some(Command::SearchExercises {
                        generation: self.exercise_generation,
                        query,
                    })
                }
                Err(err) => {
                    self.status = Status::Error(err);
                    None
                }
            },
            Msg::ExerciseSearchCompleted(generation, result) => {
                // Only the latest issued request counts, even if a later submit failed validation.
                if self.pending_exercise_search == Some(generation) {
                    self.pending_exercise_search = None;
                    match result {
                        Ok(exercises) => {
                            self.reset_inputs();
                            self.exercises = exercises;
                            if self.exercises.is_empty() {
                                self.status = Status::Error(FormError::NoExercisesFound);
                                None
                            } else {
                                self.status = Status::Success;
                                Some(Command::ScrollToResults)
                            }
                        }
                        Err(_) => {
                            self.status = Status::Error(FormError::FetchFailed);
                            None
                        }
                    }
                } else {
                    debug!("discarding outdated exercise search result");
                    None
                }
            }
        };
        (self, command)
    }

    fn clear_search(&mut self) {
        self.equipment_generation = self.equipment_generation.next();
        self.search_text.clear();
        self.search_results.clear();
    }

    fn reset_inputs(&mut self) {
        self.clear_search();
        self.selected_equipment = SelectedEquipment::new();
        self.body_part = None;
        self.body_part_list_shown = false;
        self.count = DEFAULT_COUNT.to_string();
    }
}

/// Executes the request described by a command and returns the resulting message.
///
/// Commands that do not involve a request yield `None`.
pub async fn perform<S>(command: Command, service: &S) -> Option<Msg>
where
    S: EquipmentService + ExerciseService,
{
    match command {
        Command::SearchEquipments { generation, name } => Some(Msg::EquipmentSearchCompleted(
            generation,
            service.search_equipments(&name).await,
        )),
        Command::SearchExercises { generation, query } => Some(Msg::ExerciseSearchCompleted(
            generation,
            service.search_exercises(&query).await,
        )),
        Command::ScrollToResults => None,
    }
}
