/// Built-in sample content shown until the admin tool has stored photos

use super::data::{GalleryId, GallerySummary, PhotoRecord};

const ALPS_FULL: &str =
    "https://haophotography.s3.eu-north-1.amazonaws.com/Dolomites/EXP/DSC_1431.jpg";
const ALPS_THUMB: &str =
    "https://haophotography.s3.eu-north-1.amazonaws.com/Dolomites/EXP/thumbnails_1/DSC_1431.jpg";
const CITY_FULL: &str =
    "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=600&h=400&fit=crop";
const CITY_THUMB: &str =
    "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=300&h=200&fit=crop";

fn photo(id: i64, title: &str, location: &str, year: i32, image: &str, description: &str) -> PhotoRecord {
    PhotoRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        year: Some(year),
        image: Some(image.to_string()),
        description: Some(description.to_string()),
        ..PhotoRecord::default()
    }
}

/// Index page galleries used when the store holds no photos
pub fn galleries() -> Vec<GallerySummary> {
    vec![
        GallerySummary {
            id: GalleryId::from(1),
            name: "Mountain Adventures".to_string(),
            location: Some("Swiss Alps".to_string()),
            year: Some(2024),
            photos: vec![photo(
                1,
                "Mountain Sunrise",
                "Swiss Alps",
                2024,
                ALPS_FULL,
                "Early morning light over the Swiss Alps",
            )],
            cover_image: Some(ALPS_FULL.to_string()),
            cover_thumbnail: Some(ALPS_THUMB.to_string()),
        },
        GallerySummary {
            id: GalleryId::from(2),
            name: "Urban Exploration".to_string(),
            location: Some("New York".to_string()),
            year: Some(2023),
            photos: vec![photo(
                2,
                "City Streets",
                "New York",
                2023,
                CITY_FULL,
                "Urban life in the city that never sleeps",
            )],
            cover_image: Some(CITY_FULL.to_string()),
            cover_thumbnail: Some(CITY_THUMB.to_string()),
        },
    ]
}

/// Photos of the synthetic default gallery when the store holds none
pub fn photos() -> Vec<PhotoRecord> {
    vec![
        photo(
            1,
            "Mountain Sunrise",
            "Swiss Alps",
            2024,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1200&h=800&fit=crop",
            "Early morning light over the Swiss Alps. The golden hour creates a magical atmosphere as the sun rises behind the snow-capped peaks, casting long shadows across the pristine landscape.",
        ),
        photo(
            2,
            "City Streets",
            "New York",
            2023,
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=1200&h=800&fit=crop",
            "Urban life in the city that never sleeps. The bustling streets of New York capture the energy and diversity of one of the world's most iconic cities.",
        ),
        photo(
            3,
            "Ocean Waves",
            "Hawaii",
            2023,
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1200&h=800&fit=crop",
            "Crystal clear waters of the Pacific. The turquoise waves crash against the volcanic rocks, creating a mesmerizing display of nature's power and beauty.",
        ),
        photo(
            4,
            "Desert Sunset",
            "Arizona",
            2022,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1200&h=800&fit=crop",
            "Golden hour in the desert. The warm light of sunset paints the arid landscape in brilliant oranges and reds, creating a stark contrast against the blue sky.",
        ),
        photo(
            5,
            "Forest Path",
            "Oregon",
            2022,
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200&h=800&fit=crop",
            "Peaceful walk through the woods. The dense canopy filters the sunlight, creating a serene atmosphere perfect for reflection and connection with nature.",
        ),
        photo(
            6,
            "Urban Architecture",
            "Tokyo",
            2021,
            "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=1200&h=800&fit=crop",
            "Modern cityscape of Tokyo. The futuristic architecture stands as a testament to human innovation, while traditional elements blend seamlessly with contemporary design.",
        ),
    ]
}
