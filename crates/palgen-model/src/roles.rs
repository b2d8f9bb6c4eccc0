use serde::{Deserialize, Serialize};

use crate::step::StepIndex;

/// One semantic role name bound to a scale step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    pub name: String,
    pub step: StepIndex,
}

/// An ordered mapping from semantic role names to scale steps.
///
/// Iteration order is insertion order and determines the order of
/// generated constants exactly; downstream code pastes the output into
/// a struct literal and expects a fixed field ordering. Serialized as a
/// JSON array of bindings because JSON objects do not preserve key
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap(Vec<RoleBinding>);

impl RoleMap {
    pub fn new(bindings: Vec<RoleBinding>) -> Self {
        Self(bindings)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleBinding> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoleMap {
    type Item = &'a RoleBinding;
    type IntoIter = std::slice::Iter<'a, RoleBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<RoleBinding> for RoleMap {
    fn from_iter<I: IntoIterator<Item = RoleBinding>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(name: &str, step: u8) -> RoleBinding {
        RoleBinding {
            name: name.to_string(),
            step: StepIndex::new(step).unwrap(),
        }
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let map = RoleMap::new(vec![
            binding("bg_solid", 9),
            binding("bg", 1),
            binding("border", 6),
        ]);
        let names: Vec<&str> = map.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["bg_solid", "bg", "border"]);
    }

    #[test]
    fn deserializes_from_json_array() {
        let json = r#"[{"name": "bg", "step": 1}, {"name": "border", "step": 6}]"#;
        let map: RoleMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next().unwrap().name, "bg");
    }

    #[test]
    fn rejects_out_of_range_step_in_json() {
        let json = r#"[{"name": "bg", "step": 13}]"#;
        assert!(serde_json::from_str::<RoleMap>(json).is_err());
    }
}
