use derive_more::{AsRef, Display};

pub const DEFAULT_BODY_PARTS: [&str; 8] = [
    "chest",
    "back",
    "biceps",
    "triceps",
    "legs",
    "shoulders",
    "core",
    "glutes",
];

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyPart(String);

impl BodyPart {
    pub fn new(label: &str) -> Result<Self, BodyPartError> {
        let trimmed_label = label.trim();

        if trimmed_label.is_empty() {
            return Err(BodyPartError::Empty);
        }

        Ok(BodyPart(trimmed_label.to_string()))
    }
}

/// The body parts a user can choose from, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyParts(Vec<BodyPart>);

impl BodyParts {
    pub fn new(labels: &[&str]) -> Result<Self, BodyPartError> {
        let mut body_parts: Vec<BodyPart> = Vec::with_capacity(labels.len());

        for label in labels {
            let body_part = BodyPart::new(label)?;
            if body_parts.contains(&body_part) {
                return Err(BodyPartError::Duplicate(body_part.to_string()));
            }
            body_parts.push(body_part);
        }

        if body_parts.is_empty() {
            return Err(BodyPartError::Empty);
        }

        Ok(Self(body_parts))
    }

    #[must_use]
    pub fn contains(&self, body_part: &BodyPart) -> bool {
        self.0.contains(body_part)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BodyPart> {
        self.0.iter()
    }
}

impl Default for BodyParts {
    fn default() -> Self {
        Self(
            DEFAULT_BODY_PARTS
                .iter()
                .map(|label| BodyPart((*label).to_string()))
                .collect(),
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyPartError {
    #[error("Body part must not be empty")]
    Empty,
    #[error("Duplicate body part: {0}")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("chest", Ok(BodyPart("chest".to_string())))]
    #[case("  legs ", Ok(BodyPart("legs".to_string())))]
    #[case("", Err(BodyPartError::Empty))]
    #[case("   ", Err(BodyPartError::Empty))]
    fn test_body_part_new(#[case] label: &str, #[case] expected: Result<BodyPart, BodyPartError>) {
        assert_eq!(BodyPart::new(label), expected);
    }

    #[rstest]
    #[case(&["neck", "calves"], Ok(vec!["neck", "calves"]))]
    #[case(&["neck", " calves "], Ok(vec!["neck", "calves"]))]
    #[case(&[], Err(BodyPartError::Empty))]
    #[case(&["neck", ""], Err(BodyPartError::Empty))]
    #[case(&["neck", "neck"], Err(BodyPartError::Duplicate("neck".to_string())))]
    fn test_body_parts_new(
        #[case] labels: &[&str],
        #[case] expected: Result<Vec<&str>, BodyPartError>,
    ) {
        assert_eq!(
            BodyParts::new(labels).map(|body_parts| body_parts
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()),
            expected.map(|labels| labels.into_iter().map(String::from).collect())
        );
    }

    #[test]
    fn test_body_parts_default() {
        assert_eq!(
            BodyParts::default()
                .iter()
                .map(|b| b.as_ref().as_str())
                .collect::<Vec<_>>(),
            DEFAULT_BODY_PARTS.to_vec()
        );
    }

    #[rstest]
    #[case("chest", true)]
    #[case("glutes", true)]
    #[case("Chest", false)]
    #[case("neck", false)]
    fn test_body_parts_contains(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(
            BodyParts::default().contains(&BodyPart::new(label).unwrap()),
            expected
        );
    }
}
