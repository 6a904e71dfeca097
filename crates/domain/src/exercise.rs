use derive_more::Deref;
use serde_json::Value;

use crate::{BodyPart, ReadError, SelectedEquipment};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn search_exercises(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn search_exercises(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, ReadError>;
}

/// Parameters of an exercise search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub body_part: BodyPart,
    /// Requested number of exercises, passed on as entered.
    pub limit: String,
    /// Lower-cased, comma-separated equipment names.
    pub equipments: String,
}

impl ExerciseQuery {
    #[must_use]
    pub fn new(body_part: BodyPart, limit: &str, equipment: &SelectedEquipment) -> Self {
        Self {
            body_part,
            limit: limit.to_string(),
            equipments: equipment.to_query(),
        }
    }
}

/// An exercise as returned by the exercise search.
///
/// The record is kept as received. The accessors only provide hints for presenting it.
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct Exercise(Value);

impl Exercise {
    const NAME_KEYS: [&'static str; 2] = ["name", "title"];
    const IMAGE_KEYS: [&'static str; 4] = ["gifUrl", "image", "imageUrl", "img"];

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        Self::NAME_KEYS.iter().find_map(|key| self.text(key))
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        Self::IMAGE_KEYS.iter().find_map(|key| self.text(key))
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Scalar and list attributes other than name and image, rendered as text.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        let Some(object) = self.0.as_object() else {
            return vec![];
        };
        object
            .iter()
            .filter(|(key, _)| {
                !Self::NAME_KEYS.contains(&key.as_str()) && !Self::IMAGE_KEYS.contains(&key.as_str())
            })
            .filter_map(|(key, value)| Some((key.clone(), attribute_text(value)?)))
            .collect()
    }
}

impl From<Value> for Exercise {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Exercise> for Value {
    fn from(value: Exercise) -> Self {
        value.0
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(values) => {
            let items = values
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>();
            if items.is_empty() {
                None
            } else {
                Some(items.join(", "))
            }
        }
        Value::String(_) | Value::Null | Value::Object(_) => None,
    }
}
