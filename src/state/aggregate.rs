/// Gallery derivation
///
/// Groups the flat photo list into galleries and applies cover overrides.
/// Summaries are rebuilt from scratch on every pass.

use std::collections::HashMap;
use tracing::{debug, info};

use super::data::{GalleryCoverOverride, GalleryDetail, GalleryId, GallerySummary, PhotoRecord};
use super::sample;
use super::store::Store;
use crate::error::Result;

const UNCATEGORIZED: &str = "Uncategorized";
const UNNAMED: &str = "Unnamed Gallery";

/// Group photos by gallery id, in order of first appearance.
///
/// The first photo of each gallery seeds its name, location, year and
/// cover. A cover override for the gallery, when present, replaces the
/// cover fields regardless of what the photos provide.
pub fn aggregate(photos: &[PhotoRecord], overrides: &[GalleryCoverOverride]) -> Vec<GallerySummary> {
    let mut galleries: Vec<GallerySummary> = Vec::new();
    let mut positions: HashMap<&GalleryId, usize> = HashMap::new();

    for photo in photos {
        let index = *positions.entry(&photo.gallery_id).or_insert_with(|| {
            galleries.push(GallerySummary {
                id: photo.gallery_id.clone(),
                name: photo
                    .gallery_name
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                location: photo.location.clone(),
                year: photo.year,
                photos: Vec::new(),
                cover_image: None,
                cover_thumbnail: None,
            });
            galleries.len() - 1
        });

        let gallery = &mut galleries[index];
        if gallery.cover_image.is_none() {
            gallery.cover_image = photo.image.clone();
            gallery.cover_thumbnail = photo.grid_image().map(str::to_string);
        }
        gallery.photos.push(photo.clone());
    }

    for gallery in &mut galleries {
        apply_cover(gallery, overrides);
    }

    galleries
}

fn apply_cover(gallery: &mut GallerySummary, overrides: &[GalleryCoverOverride]) {
    let cover = overrides
        .iter()
        .find(|o| o.gallery_id.as_ref() == Some(&gallery.id))
        .and_then(|o| o.cover_photo.as_ref());

    match cover {
        Some(cover) => {
            debug!("Applying cover photo for gallery {}", gallery.id);
            gallery.cover_image = cover.image.clone();
            gallery.cover_thumbnail = cover.thumbnail.clone().or_else(|| cover.image.clone());
        }
        None => debug!("No cover photo found for gallery {}", gallery.id),
    }
}

/// Galleries for the index page: the stored photos aggregated, or the
/// built-in samples when nothing is stored.
pub fn load_galleries(store: &Store) -> Result<Vec<GallerySummary>> {
    match store.read_photos()? {
        Some(photos) => {
            let covers = store.read_covers()?;
            let galleries = aggregate(&photos, &covers);
            info!("Loaded {} galleries from store", galleries.len());
            Ok(galleries)
        }
        None => {
            let galleries = sample::galleries();
            info!("Using {} sample galleries", galleries.len());
            Ok(galleries)
        }
    }
}

/// Data for the gallery page.
///
/// Falls back to the synthetic default gallery when no id is requested or
/// no stored photo belongs to the requested gallery.
pub fn gallery_detail(store: &Store, requested: Option<&GalleryId>) -> Result<GalleryDetail> {
    let stored = store.read_photos()?;

    if let (Some(id), Some(photos)) = (requested, stored.as_ref()) {
        let members: Vec<PhotoRecord> = photos
            .iter()
            .filter(|photo| &photo.gallery_id == id)
            .cloned()
            .collect();

        if let Some(first) = members.first() {
            return Ok(GalleryDetail {
                id: id.clone(),
                name: first.gallery_name.clone().unwrap_or_else(|| UNNAMED.to_string()),
                location: first.location.clone(),
                year: first.year,
                description: first.gallery_description.clone().unwrap_or_default(),
                photos: members,
            });
        }
        info!("No photos for gallery {}, showing the default gallery", id);
    }

    Ok(GalleryDetail {
        id: GalleryId::default(),
        name: "Sample Gallery".to_string(),
        location: Some("Various Locations".to_string()),
        year: Some(2024),
        description: "A collection of beautiful photographs from around the world.".to_string(),
        photos: stored.unwrap_or_else(sample::photos),
    })
}
