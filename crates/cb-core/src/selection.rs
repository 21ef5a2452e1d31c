//! Selection set and tag-based visibility filter.

use crate::id::StarId;
use crate::model::{Connection, Star};
use crate::scene::Scene;
use kurbo::Point;
use std::collections::BTreeSet;

/// Opacity of a star hidden by the tag filter.
pub const HIDDEN_STAR_OPACITY: f64 = 0.15;
/// Opacity of a connection with exactly one hidden endpoint.
pub const HALF_HIDDEN_CONNECTION_OPACITY: f64 = 0.3;
/// Opacity of a connection with both endpoints hidden.
pub const HIDDEN_CONNECTION_OPACITY: f64 = 0.1;

/// Selected star ids. Always a subset of the scene's stars once
/// [`Selection::retain_existing`] has run after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<StarId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &BTreeSet<StarId> {
        &self.0
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn select_only(&mut self, id: StarId) {
        self.0.clear();
        self.0.insert(id);
    }

    /// Add `id` if absent, remove it otherwise.
    pub fn toggle(&mut self, id: StarId) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn replace(&mut self, ids: impl IntoIterator<Item = StarId>) {
        self.0 = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Replace the selection with the stars inside the closed rectangle
    /// spanned by `a` and `b` (world space). An empty hit leaves the
    /// selection unchanged. Returns the number of stars hit.
    pub fn select_in_rect(&mut self, scene: &Scene, a: Point, b: Point) -> usize {
        let hits = scene.stars_in_rect(a, b);
        if !hits.is_empty() {
            self.replace(hits.iter().copied());
        }
        hits.len()
    }

    /// Drop ids whose star no longer exists.
    pub fn retain_existing(&mut self, scene: &Scene) {
        self.0.retain(|id| scene.contains(*id));
    }
}

/// Which tags are shown. `None` shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    visible: Option<BTreeSet<String>>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_filtering(&self) -> bool {
        self.visible.is_some()
    }

    pub fn is_tag_visible(&self, tag: &str) -> bool {
        self.visible.as_ref().is_none_or(|v| v.contains(tag))
    }

    /// Untagged stars are always visible; tagged ones need at least one
    /// visible tag.
    pub fn is_star_visible(&self, star: &Star) -> bool {
        match &self.visible {
            None => true,
            Some(visible) => star.tags.is_empty() || star.tags.iter().any(|t| visible.contains(t)),
        }
    }

    pub fn star_opacity(&self, star: &Star) -> f64 {
        if self.is_star_visible(star) {
            1.0
        } else {
            HIDDEN_STAR_OPACITY
        }
    }

    pub fn connection_opacity(&self, connection: &Connection, scene: &Scene) -> f64 {
        let visible = |id| scene.star(id).is_some_and(|s| self.is_star_visible(s));
        match (visible(connection.from), visible(connection.to)) {
            (true, true) => 1.0,
            (false, false) => HIDDEN_CONNECTION_OPACITY,
            _ => HALF_HIDDEN_CONNECTION_OPACITY,
        }
    }

    /// Flip a tag's visibility. The first toggle starts from "every tag in
    /// the scene is visible".
    pub fn toggle_tag(&mut self, tag: &str, scene: &Scene) {
        let visible = self.visible.get_or_insert_with(|| scene.all_tags());
        if !visible.remove(tag) {
            visible.insert(tag.to_string());
        }
    }

    pub fn show_all(&mut self) {
        self.visible = None;
    }
}
