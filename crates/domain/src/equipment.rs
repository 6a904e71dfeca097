use std::slice::Iter;

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait EquipmentService {
    async fn search_equipments(&self, name: &str) -> Result<Vec<Equipment>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait EquipmentRepository {
    async fn search_equipments(&self, name: &str) -> Result<Vec<Equipment>, ReadError>;
}

/// A piece of exercise gear as returned by the equipment search.
///
/// The name is the identity of a record and is compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub name: String,
    pub image: String,
}

/// The equipment chosen for the next exercise search.
///
/// Entries keep their insertion order and no two entries share a name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectedEquipment(Vec<Equipment>);

impl SelectedEquipment {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|e| e.name == name)
    }

    /// Returns `false` if an entry with the same name was already selected.
    pub fn insert(&mut self, equipment: Equipment) -> bool {
        if self.contains(&equipment.name) {
            return false;
        }
        self.0.push(equipment);
        true
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|e| e.name != name);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Equipment> {
        self.0.iter()
    }

    #[must_use]
    pub fn without_selected(&self, equipments: Vec<Equipment>) -> Vec<Equipment> {
        equipments
            .into_iter()
            .filter(|e| !self.contains(&e.name))
            .collect()
    }

    /// Lower-cased names joined by commas, in selection order.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(|e| e.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<'a> IntoIterator for &'a SelectedEquipment {
    type Item = &'a Equipment;
    type IntoIter = Iter<'a, Equipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn equipment(name: &str) -> Equipment {
        Equipment {
            name: name.to_string(),
            image: format!("https://example.org/{name}.png"),
        }
    }

    fn selected(names: &[&str]) -> SelectedEquipment {
        let mut selected = SelectedEquipment::new();
        for name in names {
            selected.insert(equipment(name));
        }
        selected
    }

    #[test]
    fn test_selected_equipment_insert() {
        let mut selected = SelectedEquipment::new();

        assert!(selected.insert(equipment("Dumbbell")));
        assert!(selected.insert(equipment("Barbell")));
        assert!(!selected.insert(equipment("Dumbbell")));

        assert_eq!(
            selected.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Dumbbell", "Barbell"]
        );
    }

    #[test]
    fn test_selected_equipment_insert_is_case_sensitive() {
        let mut selected = SelectedEquipment::new();

        assert!(selected.insert(equipment("Dumbbell")));
        assert!(selected.insert(equipment("dumbbell")));

        assert_eq!(
            selected.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Dumbbell", "dumbbell"]
        );
    }

    #[test]
    fn test_selected_equipment_never_contains_duplicates() {
        let names = ["A", "B", "A", "C", "B", "B", "D", "A"];
        let mut selected = SelectedEquipment::new();

        for (i, name) in names.iter().enumerate() {
            selected.insert(equipment(name));
            if i % 3 == 2 {
                selected.remove("B");
            }
            let mut seen = std::collections::HashSet::new();
            assert!(selected.iter().all(|e| seen.insert(e.name.clone())));
        }
    }

    #[rstest]
    #[case(&["Dumbbell", "Barbell"], "Dumbbell", &["Barbell"])]
    #[case(&["Dumbbell", "Barbell"], "Barbell", &["Dumbbell"])]
    #[case(&["Dumbbell", "Barbell"], "Kettlebell", &["Dumbbell", "Barbell"])]
    #[case(&["Dumbbell"], "dumbbell", &["Dumbbell"])]
    #[case(&[], "Dumbbell", &[])]
    fn test_selected_equipment_remove(
        #[case] names: &[&str],
        #[case] name: &str,
        #[case] expected: &[&str],
    ) {
        let mut selection = selected(names);

        selection.remove(name);

        assert_eq!(selection, selected(expected));
    }

    #[test]
    fn test_selected_equipment_without_selected() {
        let selected = selected(&["Dumbbell"]);

        assert_eq!(
            selected.without_selected(vec![
                equipment("Barbell"),
                equipment("Dumbbell"),
                equipment("dumbbell"),
            ]),
            vec![equipment("Barbell"), equipment("dumbbell")]
        );
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["Dumbbell"], "dumbbell")]
    #[case(&["Dumbbell", "Barbell"], "dumbbell,barbell")]
    #[case(&["Pull-Up Bar", "EZ Bar"], "pull-up bar,ez bar")]
    fn test_selected_equipment_to_query(#[case] names: &[&str], #[case] expected: &str) {
        assert_eq!(selected(names).to_query(), expected);
    }
}
