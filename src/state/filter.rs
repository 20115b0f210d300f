/// Year/location narrowing of the gallery list

use std::collections::BTreeSet;
use std::fmt;

use super::data::GallerySummary;

/// Distinct filter values present in a gallery list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    /// Newest first
    pub years: Vec<i32>,
    /// Alphabetical
    pub locations: Vec<String>,
}

/// Current filter choice. `None` on either axis matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub year: Option<i32>,
    pub location: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.location.is_none()
    }

    fn matches(&self, gallery: &GallerySummary) -> bool {
        let year_match = self.year.map_or(true, |year| gallery.year == Some(year));
        let location_match = self
            .location
            .as_deref()
            .map_or(true, |location| gallery.location.as_deref() == Some(location));
        year_match && location_match
    }
}

pub fn facets(galleries: &[GallerySummary]) -> Facets {
    let years: BTreeSet<i32> = galleries.iter().filter_map(|g| g.year).collect();
    let locations: BTreeSet<&str> = galleries
        .iter()
        .filter_map(|g| g.location.as_deref())
        .collect();

    Facets {
        years: years.into_iter().rev().collect(),
        locations: locations.into_iter().map(str::to_string).collect(),
    }
}

/// Galleries matching every set axis of `selection`, in input order
pub fn apply(galleries: &[GallerySummary], selection: &Selection) -> Vec<GallerySummary> {
    galleries
        .iter()
        .filter(|gallery| selection.matches(gallery))
        .cloned()
        .collect()
}

/// Entry of the year picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearChoice {
    All,
    Year(i32),
}

impl YearChoice {
    /// "All Years" followed by each facet year
    pub fn options(facets: &Facets) -> Vec<YearChoice> {
        std::iter::once(YearChoice::All)
            .chain(facets.years.iter().copied().map(YearChoice::Year))
            .collect()
    }

    pub fn from_selection(selection: &Selection) -> Self {
        selection.year.map_or(YearChoice::All, YearChoice::Year)
    }

    pub fn year(self) -> Option<i32> {
        match self {
            YearChoice::All => None,
            YearChoice::Year(year) => Some(year),
        }
    }
}

impl fmt::Display for YearChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearChoice::All => f.write_str("All Years"),
            YearChoice::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Entry of the location picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationChoice {
    All,
    Location(String),
}

impl LocationChoice {
    /// "All Locations" followed by each facet location
    pub fn options(facets: &Facets) -> Vec<LocationChoice> {
        std::iter::once(LocationChoice::All)
            .chain(facets.locations.iter().cloned().map(LocationChoice::Location))
            .collect()
    }

    pub fn from_selection(selection: &Selection) -> Self {
        selection
            .location
            .clone()
            .map_or(LocationChoice::All, LocationChoice::Location)
    }

    pub fn location(self) -> Option<String> {
        match self {
            LocationChoice::All => None,
            LocationChoice::Location(location) => Some(location),
        }
    }
}

impl fmt::Display for LocationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationChoice::All => f.write_str("All Locations"),
            LocationChoice::Location(location) => f.write_str(location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::GalleryId;

    fn gallery(id: i64, year: Option<i32>, location: Option<&str>) -> GallerySummary {
        GallerySummary {
            id: GalleryId::from(id),
            name: format!("Gallery {}", id),
            location: location.map(str::to_string),
            year,
            photos: Vec::new(),
            cover_image: None,
            cover_thumbnail: None,
        }
    }

    fn sample() -> Vec<GallerySummary> {
        vec![
            gallery(1, Some(2022), Some("Oregon")),
            gallery(2, Some(2023), Some("Hawaii")),
            gallery(3, Some(2023), Some("New York")),
            gallery(4, Some(2022), Some("Hawaii")),
            gallery(5, None, None),
        ]
    }

    #[test]
    fn test_facets_are_distinct_and_sorted() {
        let facets = facets(&sample());

        assert_eq!(facets.years, vec![2023, 2022]);
        assert_eq!(facets.locations, vec!["Hawaii", "New York", "Oregon"]);
    }

    #[test]
    fn test_empty_selection_returns_everything_in_order() {
        let galleries = sample();
        assert_eq!(apply(&galleries, &Selection::default()), galleries);
    }

    #[test]
    fn test_year_filter_is_exact() {
        let selection = Selection {
            year: Some(2023),
            location: None,
        };

        let filtered = apply(&sample(), &selection);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|g| g.year == Some(2023)));
    }

    #[test]
    fn test_filters_combine() {
        let selection = Selection {
            year: Some(2022),
            location: Some("Hawaii".to_string()),
        };

        let filtered = apply(&sample(), &selection);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "4");
    }

    #[test]
    fn test_no_match_is_empty() {
        let selection = Selection {
            year: Some(1999),
            location: None,
        };
        assert!(apply(&sample(), &selection).is_empty());
    }

    #[test]
    fn test_choices_round_trip_selection() {
        let facets = facets(&sample());
        let years = YearChoice::options(&facets);
        assert_eq!(years[0], YearChoice::All);
        assert_eq!(years[1].to_string(), "2023");

        let locations = LocationChoice::options(&facets);
        assert_eq!(locations[0].to_string(), "All Locations");
        assert_eq!(locations.len(), 4);

        let selection = Selection {
            year: None,
            location: Some("Oregon".to_string()),
        };
        assert_eq!(YearChoice::from_selection(&selection), YearChoice::All);
        assert_eq!(
            LocationChoice::from_selection(&selection).location().as_deref(),
            Some("Oregon")
        );
    }
}
