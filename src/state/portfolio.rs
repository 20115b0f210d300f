use super::data::GallerySummary;
use super::filter::{self, Facets, Selection};

/// Owner of the index page snapshot: every gallery, the active filter, and
/// what that filter leaves visible. Facets and the visible list are always
/// derived from `galleries` and `selection`, never edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    galleries: Vec<GallerySummary>,
    selection: Selection,
    visible: Vec<GallerySummary>,
    facets: Facets,
}

impl Portfolio {
    pub fn new(galleries: Vec<GallerySummary>) -> Self {
        let facets = filter::facets(&galleries);
        Portfolio {
            visible: galleries.clone(),
            galleries,
            selection: Selection::default(),
            facets,
        }
    }

    pub fn galleries(&self) -> &[GallerySummary] {
        &self.galleries
    }

    /// Galleries passing the current filter
    pub fn visible(&self) -> &[GallerySummary] {
        &self.visible
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.selection.year = year;
        self.refilter();
    }

    pub fn select_location(&mut self, location: Option<String>) {
        self.selection.location = location;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.selection = Selection::default();
        self.visible = self.galleries.clone();
    }

    /// Swap in a new snapshot. Filters reset to show everything.
    /// Returns the previous gallery count.
    pub fn replace(&mut self, galleries: Vec<GallerySummary>) -> usize {
        let previous = self.galleries.len();
        self.facets = filter::facets(&galleries);
        self.galleries = galleries;
        self.clear_filters();
        previous
    }

    fn refilter(&mut self) {
        self.visible = filter::apply(&self.galleries, &self.selection);
    }
}
