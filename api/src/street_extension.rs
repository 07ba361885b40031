//! Per-street metadata stored next to the street itself.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreetExtension {
    pub street_id: String,
    pub description: String,
    pub tags: Vec<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl StreetExtension {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn to_value(&self) -> Value {
        // A struct of plain fields always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn location(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }

    /// The tags as shown in forms and tables.
    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }

    /// Parses a comma separated tag list, dropping blanks.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_documents_fill_in_defaults() {
        let ext = StreetExtension::from_value(json!({"streetId": "s1", "lat": 48.2})).unwrap();
        assert_eq!(ext.street_id, "s1");
        assert!(ext.tags.is_empty());
        assert_eq!(ext.location(), None);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(StreetExtension::from_value(json!({"tags": "not-a-list"})).is_err());
    }

    #[test]
    fn tags_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            StreetExtension::parse_tags(" school , ,bike "),
            vec!["school".to_string(), "bike".to_string()]
        );
    }
}
