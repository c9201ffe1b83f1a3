use std::collections::BTreeMap;

use serde::Serialize;

/// A question category (read-only from the API's point of view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Converts categories into the `{id: type}` mapping clients expect
///
/// Only ids of the categories passed in appear in the result. Keys
/// serialize as decimal strings since JSON object keys are strings.
pub fn format_categories(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_categories_by_id() {
        let categories = vec![
            Category::new(2, "Art"),
            Category::new(5, "Entertainment"),
            Category::new(3, "Geography"),
        ];

        let formatted = format_categories(&categories);

        assert_eq!(formatted.len(), 3);
        assert_eq!(formatted[&2], "Art");
        assert_eq!(formatted[&5], "Entertainment");
        assert_eq!(formatted[&3], "Geography");
    }

    #[test]
    fn formatting_nothing_yields_empty_mapping() {
        assert!(format_categories(&[]).is_empty());
    }

    #[test]
    fn mapping_serializes_with_string_keys() {
        let formatted = format_categories(&[Category::new(1, "Science")]);
        assert_eq!(serde_json::to_value(formatted).unwrap(), json!({"1": "Science"}));
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let value = serde_json::to_value(Category::new(4, "History")).unwrap();
        assert_eq!(value, json!({"id": 4, "type": "History"}));
    }
}
