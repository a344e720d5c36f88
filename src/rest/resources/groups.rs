//! Group and group membership resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::Photo;
use crate::rest::ApiObject;

/// A group of users sharing a library.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Group {
    /// The group id.
    pub id: String,
    /// Group name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Disciplines the group covers.
    pub disciplines: Vec<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Group web page.
    pub webpage: Option<String>,
    /// When the group was created.
    pub created: Option<DateTime<Utc>>,
    /// The profile that owns the group.
    pub owning_profile_id: Option<String>,
    /// Public link to the group.
    pub link: Option<String>,
    /// The current user's role in the group.
    pub role: Option<String>,
    /// Access level (`private`, `invite_only`, `public`).
    pub access_level: Option<String>,
    /// Group photo.
    pub photo: Option<Photo>,
}

impl ApiObject for Group {
    type ListParams = GroupListParams;

    const NAME: &'static str = "Group";
    const MEDIA_TYPE: &'static str = "application/vnd.mendeley-group.1+json";
}

/// Parameters for listing groups and group members.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupListParams {
    /// Number of entries per page.
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// A member of a group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GroupMember {
    /// The member's profile id.
    pub profile_id: String,
    /// When the member joined.
    pub joined: Option<DateTime<Utc>>,
    /// Role (`owner`, `admin`, `normal`, `follower`).
    pub role: Option<String>,
}

impl ApiObject for GroupMember {
    type ListParams = GroupListParams;

    const NAME: &'static str = "GroupMember";
    const MEDIA_TYPE: &'static str = "application/vnd.mendeley-membership.1+json";
}
