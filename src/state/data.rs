/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store layer and the UI layer. Records come from JSON written by an
/// external admin tool, so every field is optional and deserialization is
/// lenient: numbers and strings are both accepted where the admin tool has
/// been seen to write either, and blank strings read as absent.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical gallery identifier.
///
/// Normalized once at ingestion so the rest of the program compares plain
/// strings: `2`, `2.0` and `"2"` all become `"2"`. Missing, null and blank
/// ids become `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GalleryId(String);

impl GalleryId {
    /// Identifier used for records that name no gallery
    pub const DEFAULT: &'static str = "default";

    /// Normalize a raw identifier (e.g. from `--gallery`)
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return GalleryId(n.to_string());
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if let Some(n) = whole_number(f) {
                return GalleryId(n.to_string());
            }
        }
        GalleryId(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for GalleryId {
    fn default() -> Self {
        GalleryId(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for GalleryId {
    fn from(n: i64) -> Self {
        GalleryId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for GalleryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Loose>::deserialize(deserializer)?;
        Ok(match raw.and_then(Loose::into_text) {
            Some(text) => GalleryId::new(&text),
            None => GalleryId::default(),
        })
    }
}

/// A single photo as stored under the `galleryPhotos` key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Full-size image URL (or local path)
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub gallery_id: GalleryId,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub gallery_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub gallery_description: Option<String>,
}

impl PhotoRecord {
    /// Image to show in a grid: the thumbnail when there is one
    pub fn grid_image(&self) -> Option<&str> {
        self.thumbnail.as_deref().or(self.image.as_deref())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Replacement cover for one gallery
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverPhoto {
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "loose_text", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// An entry under the `galleryCovers` key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCoverOverride {
    /// Missing, null or blank means the override targets no gallery
    #[serde(default, deserialize_with = "optional_gallery_id", skip_serializing_if = "Option::is_none")]
    pub gallery_id: Option<GalleryId>,
    /// Overrides without a cover photo are ignored
    #[serde(default)]
    pub cover_photo: Option<CoverPhoto>,
}

/// A gallery derived from the flat photo list. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySummary {
    pub id: GalleryId,
    pub name: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    /// Member photos in store order
    pub photos: Vec<PhotoRecord>,
    pub cover_image: Option<String>,
    pub cover_thumbnail: Option<String>,
}

impl GallerySummary {
    /// Image to show on the index card
    pub fn card_image(&self) -> Option<&str> {
        self.cover_thumbnail.as_deref().or(self.cover_image.as_deref())
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}

/// Everything the gallery page shows
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryDetail {
    pub id: GalleryId,
    pub name: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub description: String,
    pub photos: Vec<PhotoRecord>,
}

/// Any JSON scalar the admin tool might have written
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Loose::Int(n) => n.to_string(),
            Loose::Float(f) => match whole_number(f) {
                Some(n) => n.to_string(),
                None => f.to_string(),
            },
            Loose::Text(s) => s,
            Loose::Other(_) => return None,
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn into_year(self) -> Option<i32> {
        match self {
            Loose::Int(n) => i32::try_from(n).ok(),
            Loose::Float(f) => whole_number(f).and_then(|n| i32::try_from(n).ok()),
            Loose::Text(s) => s.trim().parse().ok(),
            Loose::Other(_) => None,
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(Loose::into_text))
}

fn optional_gallery_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GalleryId>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?
        .and_then(Loose::into_text)
        .map(|text| GalleryId::new(&text)))
}

fn loose_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(Loose::into_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gallery_id_normalizes_numbers_and_strings() {
        let from_int: GalleryId = serde_json::from_value(json!(2)).unwrap();
        let from_str: GalleryId = serde_json::from_value(json!("2")).unwrap();
        let from_float: GalleryId = serde_json::from_value(json!(2.0)).unwrap();

        assert_eq!(from_int, from_str);
        assert_eq!(from_int, from_float);
        assert_eq!(from_int.as_str(), "2");
        assert_eq!(GalleryId::new(" 02 "), from_int);
    }

    #[test]
    fn test_missing_or_blank_gallery_id_is_default() {
        let photo: PhotoRecord = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(photo.gallery_id.is_default());

        let photo: PhotoRecord =
            serde_json::from_value(json!({"id": 1, "galleryId": null})).unwrap();
        assert!(photo.gallery_id.is_default());

        let photo: PhotoRecord = serde_json::from_value(json!({"galleryId": "  "})).unwrap();
        assert!(photo.gallery_id.is_default());
    }

    #[test]
    fn test_record_fields_are_lenient() {
        let photo: PhotoRecord = serde_json::from_value(json!({
            "id": 7,
            "title": "Lake",
            "year": "2021",
            "image": "https://example.com/lake.jpg",
            "thumbnail": "",
            "galleryId": "lakes",
            "galleryName": "Lakes",
            "location": {"unexpected": true}
        }))
        .unwrap();

        assert_eq!(photo.id.as_deref(), Some("7"));
        assert_eq!(photo.year, Some(2021));
        assert_eq!(photo.thumbnail, None);
        assert_eq!(photo.location, None);
        assert_eq!(photo.grid_image(), Some("https://example.com/lake.jpg"));
        assert_eq!(photo.gallery_id.as_str(), "lakes");
    }

    #[test]
    fn test_override_without_cover_photo_parses() {
        let cover: GalleryCoverOverride =
            serde_json::from_value(json!({"galleryId": 5})).unwrap();
        assert_eq!(cover.gallery_id, Some(GalleryId::from(5)));
        assert!(cover.cover_photo.is_none());
    }

    #[test]
    fn test_override_without_gallery_id_targets_nothing() {
        for value in [
            json!({"coverPhoto": {"image": "x.jpg"}}),
            json!({"galleryId": null, "coverPhoto": {"image": "x.jpg"}}),
            json!({"galleryId": " ", "coverPhoto": {"image": "x.jpg"}}),
        ] {
            let cover: GalleryCoverOverride = serde_json::from_value(value).unwrap();
            assert_eq!(cover.gallery_id, None);
        }
    }
}
