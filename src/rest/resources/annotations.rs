//! Annotation resource implementation.
//!
//! Annotations are notes and highlights attached to documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpError;
use crate::rest::{ApiObject, ResourceAccessor};

/// A note or highlight on a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Annotation {
    /// The annotation id.
    pub id: String,
    /// Annotation type (`note`, `highlight`, `sticky_note`).
    #[serde(rename = "type")]
    pub annotation_type: Option<String>,
    /// Text content.
    pub text: Option<String>,
    /// Highlight colour.
    pub color: Option<Color>,
    /// The annotated document.
    pub document_id: Option<String>,
    /// The author's profile.
    pub profile_id: Option<String>,
    /// Hash of the annotated file.
    pub filehash: Option<String>,
    /// Where on the file the annotation sits.
    pub positions: Vec<Position>,
    /// Visibility (`private`, `group`, `public`).
    pub privacy_level: Option<String>,
    /// When the annotation was created.
    pub created: Option<DateTime<Utc>>,
    /// When the annotation was last changed.
    pub last_modified: Option<DateTime<Utc>>,
    /// Id of the annotation this one replaced.
    pub previous_id: Option<String>,
}

impl ApiObject for Annotation {
    type ListParams = AnnotationListParams;

    const NAME: &'static str = "Annotation";
    const MEDIA_TYPE: &'static str = "application/vnd.mendeley-annotation.1+json";
}

/// An RGB colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A point on a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// A rectangle on a page of the annotated file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Position {
    /// Top-left corner.
    pub top_left: Option<Point>,
    /// Bottom-right corner.
    pub bottom_right: Option<Point>,
    /// Page number, starting at 1.
    pub page: Option<u32>,
}

/// Parameters for listing annotations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationListParams {
    /// Number of annotations per page.
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Only annotations on this document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Only annotations in this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Only annotations changed after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<DateTime<Utc>>,
    /// Only annotations deleted after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_since: Option<DateTime<Utc>>,
}

impl ResourceAccessor<'_, Annotation> {
    /// Deletes an annotation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.delete_item(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_deserialization() {
        let json = r#"{
            "id": "a1",
            "type": "highlight",
            "color": {"r": 255, "g": 245, "b": 173},
            "document_id": "d1",
            "positions": [{
                "top_left": {"x": 10.5, "y": 20.0},
                "bottom_right": {"x": 100.0, "y": 30.25},
                "page": 3
            }],
            "privacy_level": "private"
        }"#;

        let annotation: Annotation = serde_json::from_str(json).unwrap();

        assert_eq!(annotation.annotation_type.as_deref(), Some("highlight"));
        assert_eq!(annotation.color, Some(Color { r: 255, g: 245, b: 173 }));
        assert_eq!(annotation.positions[0].page, Some(3));
        assert_eq!(
            annotation.positions[0].top_left,
            Some(Point { x: 10.5, y: 20.0 })
        );
        assert!(annotation.text.is_none());
    }
}
