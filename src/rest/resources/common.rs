//! Types shared by several entities.

use serde::{Deserialize, Serialize};

/// An author, editor or translator of a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Person {
    /// Given name(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Scopus author id, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopus_author_id: Option<String>,
}

impl Person {
    /// Returns `"First Last"`, or whichever part is present.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// An image rendition of a profile or group photo.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
    /// Where the image can be downloaded.
    pub url: Option<String>,
    /// Whether this is the uploaded original.
    pub original: Option<bool>,
}

/// A named place.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Location {
    /// Display name of the place.
    pub name: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
}

/// A research discipline with its subdisciplines.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Discipline {
    /// Discipline name.
    pub name: Option<String>,
    /// Subdiscipline names.
    pub subdisciplines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_full_name() {
        let person = Person {
            first_name: Some("Ariadna Valentina".to_string()),
            last_name: Some("Lopes".to_string()),
            ..Default::default()
        };
        assert_eq!(person.full_name(), "Ariadna Valentina Lopes");

        let last_only = Person {
            last_name: Some("Lopes".to_string()),
            ..Default::default()
        };
        assert_eq!(last_only.full_name(), "Lopes");
        assert_eq!(Person::default().full_name(), "");
    }

    #[test]
    fn test_person_missing_fields_deserialize_to_none() {
        let person: Person = serde_json::from_str(r#"{"last_name": "Tabarelli"}"#).unwrap();
        assert_eq!(person.last_name.as_deref(), Some("Tabarelli"));
        assert!(person.first_name.is_none());
    }
}
