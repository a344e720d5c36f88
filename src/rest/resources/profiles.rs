//! Profile resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpMethod, HttpRequest};
use crate::rest::resources::common::{Discipline, Location, Photo};
use crate::rest::{ApiObject, ResourceAccessor};

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// The profile id.
    pub id: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Email address (own profile only).
    pub email: Option<String>,
    /// Public profile link.
    pub link: Option<String>,
    /// Free-text research interests.
    pub research_interests: Option<String>,
    /// Academic status (e.g. `Professor`, `Student > Ph. D. Student`).
    pub academic_status: Option<String>,
    /// Whether the profile is verified.
    pub verified: Option<bool>,
    /// Account type.
    pub user_type: Option<String>,
    /// When the profile was created.
    pub created: Option<DateTime<Utc>>,
    /// Main discipline.
    pub discipline: Option<Discipline>,
    /// Profile photos in several sizes.
    pub photos: Vec<Photo>,
    /// Where the user is based.
    pub location: Option<Location>,
    /// Title (e.g. `Dr`).
    pub title: Option<String>,
    /// Any fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ApiObject for Profile {
    type ListParams = ProfileListParams;

    const NAME: &'static str = "Profile";
    const MEDIA_TYPE: &'static str = "application/vnd.mendeley-profiles.1+json";
}

/// Parameters for listing profiles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileListParams {
    /// Look up profiles by email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ResourceAccessor<'_, Profile> {
    /// Fetches the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be decoded.
    pub async fn me(&self) -> Result<Profile, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("{}/me", self.collection()))
            .header("Accept", Profile::MEDIA_TYPE)
            .build();

        let response = self.session().request(request).await?;
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialization_keeps_unknown_fields() {
        let json = r#"{
            "id": "p1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "display_name": "Ada Lovelace",
            "academic_status": "Professor",
            "discipline": {"name": "Computer Science", "subdisciplines": ["Algorithms"]},
            "photos": [{"width": 48, "height": 48, "url": "https://example.com/48.png"}],
            "location": {"name": "London", "latitude": 51.5, "longitude": -0.12},
            "marketing": false
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            profile.discipline.as_ref().and_then(|d| d.name.as_deref()),
            Some("Computer Science")
        );
        assert_eq!(profile.photos[0].width, Some(48));
        assert_eq!(profile.extra.get("marketing"), Some(&serde_json::json!(false)));
    }
}
