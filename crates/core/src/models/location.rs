use serde::{Deserialize, Serialize};

/// Latitude/longitude of a store. Informational only; never substituted
/// into ad copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A physical store targeted by the campaign.
///
/// Display fields default to empty so that a sparse record still loads;
/// the resolver renders missing values as blanks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Names of display fields that are empty, in declaration order.
    pub fn missing_display_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("phoneNumber", &self.phone_number),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A named, ordered set of locations that can be selected as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup {
    pub name: String,
    #[serde(default)]
    pub location_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display_fields() {
        let loc = Location {
            id: "a".into(),
            name: "Uptown".into(),
            city: "Denver".into(),
            state: " ".into(),
            ..Default::default()
        };
        assert_eq!(
            loc.missing_display_fields(),
            vec!["state", "zipCode", "phoneNumber", "address"]
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let yaml = r#"
id: store-1
name: Uptown
zipCode: "80202"
phoneNumber: 555-0100
landingPageUrl: https://example.com/uptown
coordinates:
  latitude: 39.74
  longitude: -104.99
"#;
        let loc: Location = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(loc.zip_code, "80202");
        assert_eq!(loc.phone_number, "555-0100");
        assert_eq!(loc.landing_page_url.as_deref(), Some("https://example.com/uptown"));
        assert!(loc.city.is_empty());
        assert_eq!(loc.coordinates.map(|c| c.latitude), Some(39.74));
    }
}
