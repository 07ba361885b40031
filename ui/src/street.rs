//! The street being edited, as far as the dialogs and the image export care.

use api::ApiClient;
use api::ApiError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Sidewalk,
    BikeLane,
    DriveLane,
    Parking,
    Transit,
    Divider,
}

impl SegmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sidewalk => "Sidewalk",
            Self::BikeLane => "Bike lane",
            Self::DriveLane => "Drive lane",
            Self::Parking => "Parking",
            Self::Transit => "Transit",
            Self::Divider => "Divider",
        }
    }

    /// Fill color of the segment in exported images, as RGB.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Sidewalk => (0xd9, 0xd4, 0xc7),
            Self::BikeLane => (0x4c, 0xaf, 0x50),
            Self::DriveLane => (0x5a, 0x5a, 0x5a),
            Self::Parking => (0x7a, 0x7a, 0x7a),
            Self::Transit => (0xb7, 0x3a, 0x2f),
            Self::Divider => (0x8b, 0xa8, 0x5c),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    #[serde(default)]
    pub label: Option<String>,
    /// Width in street units (feet).
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Street {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Street {
    pub fn total_width(&self) -> f32 {
        self.segments.iter().map(|s| s.width.max(0.0)).sum()
    }

    /// Share of the street's width taken by each kind of segment, in order of
    /// first appearance.
    pub fn width_shares(&self) -> Vec<(SegmentKind, f32)> {
        let total = self.total_width();
        let mut shares: Vec<(SegmentKind, f32)> = Vec::new();
        if total <= 0.0 {
            return shares;
        }
        for segment in &self.segments {
            let share = segment.width.max(0.0) / total;
            match shares.iter_mut().find(|(kind, _)| *kind == segment.kind) {
                Some((_, sum)) => *sum += share,
                None => shares.push((segment.kind, share)),
            }
        }
        shares
    }

    /// Builds a street from a `v1/streets/{id}` payload. The layout may sit
    /// under `data.street`; the requested id always wins.
    pub fn from_value(value: Value, id: &str) -> Result<Self, serde_json::Error> {
        let name = value.get("name").and_then(Value::as_str).map(str::to_owned);
        let layout = match value.pointer("/data/street") {
            Some(inner) => inner.clone(),
            None => value,
        };
        let mut street: Street = serde_json::from_value(layout)?;
        street.id = Some(id.to_string());
        street.name = street.name.or(name);
        Ok(street)
    }

    /// The street every new session starts with.
    pub fn sample() -> Self {
        let segment = |kind, label: &str, width| Segment {
            kind,
            label: Some(label.to_string()),
            width,
        };
        Self {
            id: None,
            name: Some("Main Ave".to_string()),
            segments: vec![
                segment(SegmentKind::Sidewalk, "Sidewalk", 6.0),
                segment(SegmentKind::BikeLane, "Bike lane", 6.0),
                segment(SegmentKind::DriveLane, "Drive lane", 10.0),
                segment(SegmentKind::Divider, "Planting strip", 4.0),
                segment(SegmentKind::DriveLane, "Drive lane", 10.0),
                segment(SegmentKind::Parking, "Parking lane", 8.0),
                segment(SegmentKind::Sidewalk, "Sidewalk", 6.0),
            ],
        }
    }
}

/// Reads the requested street id from the page address, either
/// `?street=<id>` or a `/s/<id>` path.
pub fn street_id_from_location(pathname: &str, search: &str) -> Option<String> {
    let from_query = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("street="));
    let from_path = || {
        let mut parts = pathname.trim_matches('/').split('/');
        match (parts.next(), parts.next()) {
            (Some("s"), Some(id)) => Some(id),
            _ => None,
        }
    };
    from_query
        .or_else(from_path)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Fetches a saved street. When it cannot be fetched or read, the sample
/// layout is used under the same id so per-street features keep working.
pub async fn fetch_street(api: &ApiClient, id: &str) -> Street {
    let loaded = match api.street(id).await {
        Ok(value) => Street::from_value(value, id).map_err(ApiError::from),
        Err(e) => Err(e),
    };
    loaded.unwrap_or_else(|e| {
        dioxus_logger::tracing::warn!("could not load street {}: {:#}", id, e);
        Street {
            id: Some(id.to_string()),
            ..Street::sample()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_widths_do_not_shrink_the_street() {
        let mut street = Street::sample();
        let width = street.total_width();
        street.segments.push(Segment {
            kind: SegmentKind::Divider,
            label: None,
            width: -3.0,
        });
        assert_eq!(street.total_width(), width);
    }

    #[test]
    fn width_shares_group_by_kind_and_sum_to_one() {
        let shares = Street::sample().width_shares();
        assert_eq!(shares[0].0, SegmentKind::Sidewalk);
        assert!((shares[0].1 - 12.0 / 50.0).abs() < 1e-6);
        let total: f32 = shares.iter().map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert!(Street::default().width_shares().is_empty());
    }

    #[test]
    fn streets_load_from_json_with_kebab_case_kinds() {
        let street: Street = serde_json::from_str(
            r#"{"id": "s1", "segments": [{"kind": "bike-lane", "width": 5.5}]}"#,
        )
        .unwrap();
        assert_eq!(street.segments[0].kind, SegmentKind::BikeLane);
        assert_eq!(street.name, None);
    }

    #[test]
    fn saved_streets_keep_the_requested_id() {
        let payload = serde_json::json!({
            "id": "ignored",
            "name": "Mariahilfer Straße",
            "data": { "street": { "segments": [{"kind": "sidewalk", "width": 8.0}] } },
        });
        let street = Street::from_value(payload, "abc123").unwrap();
        assert_eq!(street.id.as_deref(), Some("abc123"));
        assert_eq!(street.name.as_deref(), Some("Mariahilfer Straße"));
        assert_eq!(street.segments.len(), 1);

        assert!(Street::from_value(serde_json::json!({"segments": 3}), "x").is_err());
    }

    #[test]
    fn street_ids_come_from_the_query_or_the_path() {
        assert_eq!(street_id_from_location("/", "?street=abc"), Some("abc".to_string()));
        assert_eq!(
            street_id_from_location("/", "?lang=de&street=abc&x=1"),
            Some("abc".to_string())
        );
        assert_eq!(street_id_from_location("/s/xyz/", ""), Some("xyz".to_string()));
        assert_eq!(street_id_from_location("/s/xyz", "?street=abc"), Some("abc".to_string()));
        assert_eq!(street_id_from_location("/", ""), None);
        assert_eq!(street_id_from_location("/new", "?street="), None);
        assert_eq!(street_id_from_location("/s/", ""), None);
    }

    #[tokio::test]
    async fn unreachable_streets_fall_back_to_the_sample_layout() {
        let api = ApiClient::new(crate::test_support::UNREACHABLE_API);
        let street = fetch_street(&api, "abc123").await;
        assert_eq!(street.id.as_deref(), Some("abc123"));
        assert_eq!(street.segments, Street::sample().segments);
    }
}
