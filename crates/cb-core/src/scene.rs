//! The mutable constellation: stars, connections and id counters.
//!
//! Every public mutation either applies exactly one change or leaves the
//! scene untouched, and reports which through its return value so callers
//! know whether to record history. Storage is `im::Vector`, so cloning a
//! scene for an undo snapshot shares structure with the live copy.

use crate::id::{ConnectionId, StarId};
use crate::model::{Connection, LineStyle, Rgb, Star, StarEdit, UNTITLED, default_title, parse_tags};
use crate::snapshot::{ImportMode, Snapshot};
use chrono::Utc;
use im::Vector;
use kurbo::{Point, Rect};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Pick radius around a star center, in world units.
pub const HIT_RADIUS: f64 = 15.0;

/// What an import actually brought in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub stars: usize,
    pub connections: usize,
    /// Imported stars whose id collided and was reassigned.
    pub remapped: usize,
    /// Imported connections dropped as dangling, self-loops or duplicates.
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    stars: Vector<Star>,
    connections: Vector<Connection>,
    next_star_id: u64,
    last_connection_id: i64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            stars: Vector::new(),
            connections: Vector::new(),
            next_star_id: 1,
            last_connection_id: 0,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Stars in paint order (last is topmost).
    pub fn stars(&self) -> &Vector<Star> {
        &self.stars
    }

    pub fn connections(&self) -> &Vector<Connection> {
        &self.connections
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.star(id).is_some()
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.connections.is_empty()
    }

    /// The id the next `add_star` will assign.
    pub fn next_star_id(&self) -> StarId {
        StarId(self.next_star_id)
    }

    /// Whether `a` and `b` are already linked, in either direction.
    pub fn has_connection(&self, a: StarId, b: StarId) -> bool {
        self.connections.iter().any(|c| c.joins(a, b))
    }

    /// Number of connections touching `id`.
    pub fn degree(&self, id: StarId) -> usize {
        self.connections.iter().filter(|c| c.touches(id)).count()
    }

    /// Topmost star whose center is strictly within [`HIT_RADIUS`] of `world`.
    pub fn find_star_at(&self, world: Point) -> Option<&Star> {
        self.find_star_within(world, HIT_RADIUS)
    }

    pub fn find_star_within(&self, world: Point, radius: f64) -> Option<&Star> {
        self.stars
            .iter()
            .rev()
            .find(|s| s.position().distance(world) < radius)
    }

    /// Ids of stars inside the closed rectangle spanned by two corners.
    pub fn stars_in_rect(&self, a: Point, b: Point) -> Vec<StarId> {
        let rect = Rect::from_points(a, b);
        self.stars
            .iter()
            .filter(|s| {
                s.x >= rect.x0 && s.x <= rect.x1 && s.y >= rect.y0 && s.y <= rect.y1
            })
            .map(|s| s.id)
            .collect()
    }

    /// Bounding box of all star centers.
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.stars.iter();
        let first = iter.next()?;
        let start = Rect::from_points(first.position(), first.position());
        Some(iter.fold(start, |acc, s| acc.union_pt(s.position())))
    }

    /// Distinct tags across all stars.
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.stars
            .iter()
            .flat_map(|s| s.tags.iter().cloned())
            .collect()
    }

    /// Tag → number of occurrences.
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.stars.iter().flat_map(|s| s.tags.iter()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Create a star with the next id. Never fails.
    pub fn add_star(&mut self, position: Point, color: Rgb) -> Star {
        let id = StarId(self.next_star_id);
        self.next_star_id += 1;
        let star = Star::new(id, position, color);
        self.stars.push_back(star.clone());
        star
    }

    /// Remove a star and every connection touching it.
    pub fn delete_star(&mut self, id: StarId) -> Option<Star> {
        let index = self.index_of(id)?;
        let star = self.stars.remove(index);
        self.connections.retain(|c| !c.touches(id));
        Some(star)
    }

    /// Batch delete with full cascade. Returns how many stars were removed.
    pub fn delete_stars(&mut self, ids: &BTreeSet<StarId>) -> usize {
        let before = self.stars.len();
        self.stars.retain(|s| !ids.contains(&s.id));
        let removed = before - self.stars.len();
        if removed > 0 {
            self.connections
                .retain(|c| !ids.contains(&c.from) && !ids.contains(&c.to));
        }
        removed
    }

    /// Link two distinct, existing, not-yet-linked stars.
    pub fn add_connection(
        &mut self,
        a: StarId,
        b: StarId,
        color: Rgb,
        style: LineStyle,
    ) -> Option<ConnectionId> {
        if a == b || !self.contains(a) || !self.contains(b) || self.has_connection(a, b) {
            return None;
        }
        let id = self.allocate_connection_id();
        self.connections.push_back(Connection {
            id,
            from: a,
            to: b,
            color,
            style,
            created_at: Utc::now(),
        });
        Some(id)
    }

    /// Connect every pair of stars that share a tag. A star with several
    /// tags takes part in several groups. Returns the number created.
    pub fn connect_by_tag(&mut self, color: Rgb, style: LineStyle) -> usize {
        let mut groups: BTreeMap<&str, Vec<StarId>> = BTreeMap::new();
        for star in self.stars.iter() {
            for tag in &star.tags {
                let group = groups.entry(tag.as_str()).or_default();
                if !group.contains(&star.id) {
                    group.push(star.id);
                }
            }
        }
        let groups: Vec<Vec<StarId>> = groups.into_values().filter(|g| g.len() >= 2).collect();

        let mut created = 0;
        for group in &groups {
            for (i, &a) in group.iter().enumerate() {
                for &b in &group[i + 1..] {
                    if self.add_connection(a, b, color, style).is_some() {
                        created += 1;
                    }
                }
            }
        }
        created
    }

    /// Apply an editor save. Returns `false` when nothing changed.
    pub fn update_star(&mut self, id: StarId, edit: &StarEdit) -> bool {
        let Some(star) = self.star_mut(id) else {
            return false;
        };
        let before = star.clone();
        if let Some(title) = &edit.title {
            let title = title.trim();
            star.title = if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            };
        }
        if let Some(description) = &edit.description {
            star.description = description.clone();
        }
        if let Some(tags) = &edit.tags {
            star.tags = parse_tags(tags);
        }
        if let Some(shape) = edit.shape {
            star.shape = shape;
        }
        *star != before
    }

    /// Live reposition during a drag.
    pub fn move_star(&mut self, id: StarId, position: Point) -> bool {
        match self.star_mut(id) {
            Some(star) if star.position() != position => {
                star.set_position(position);
                true
            }
            _ => false,
        }
    }

    /// Batch recolor. Returns how many stars changed color.
    pub fn recolor_stars(&mut self, ids: &BTreeSet<StarId>, color: Rgb) -> usize {
        let mut changed = 0;
        for star in self.stars.iter_mut() {
            if ids.contains(&star.id) && star.color != color {
                star.color = color;
                changed += 1;
            }
        }
        changed
    }

    /// Remove everything and restart ids at 1.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() && self.next_star_id == 1 {
            return false;
        }
        self.stars.clear();
        self.connections.clear();
        self.next_star_id = 1;
        true
    }

    // ─── Snapshots ───────────────────────────────────────────────────────

    /// Deep, order-preserving copy in the persisted format.
    pub fn serialize(&self) -> Snapshot {
        Snapshot {
            stars: self.stars.iter().cloned().collect(),
            connections: self.connections.iter().cloned().collect(),
            next_star_id: self.next_star_id,
        }
    }

    /// Hydrate from a persisted snapshot. Duplicate star ids keep their
    /// first occurrence; dangling, self-looping and duplicate connections
    /// are dropped.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut scene = Scene::new();
        scene.import_snapshot(snapshot, ImportMode::Replace);
        scene
    }

    pub fn import_snapshot(&mut self, snapshot: Snapshot, mode: ImportMode) -> ImportSummary {
        let summary = match mode {
            ImportMode::Replace => self.replace_with(snapshot),
            ImportMode::Append => self.append(snapshot),
        };
        log::debug!(
            "imported {} stars, {} connections ({:?}, {} remapped, {} dropped)",
            summary.stars,
            summary.connections,
            mode,
            summary.remapped,
            summary.dropped
        );
        summary
    }

    fn replace_with(&mut self, snapshot: Snapshot) -> ImportSummary {
        let floor = self
            .max_star_id()
            .max(self.next_star_id.saturating_sub(1))
            .max(snapshot.next_star_id.saturating_sub(1));
        self.stars.clear();
        self.connections.clear();

        let mut summary = ImportSummary::default();
        let mut seen = HashSet::new();
        for mut star in snapshot.stars {
            if !seen.insert(star.id) {
                summary.dropped += 1;
                continue;
            }
            if star.title.is_empty() {
                star.title = default_title(star.id);
            }
            self.stars.push_back(star);
            summary.stars += 1;
        }
        self.next_star_id = floor.max(self.max_star_id()) + 1;

        for connection in snapshot.connections {
            if self.adopt_connection(connection) {
                summary.connections += 1;
            } else {
                summary.dropped += 1;
            }
        }
        summary
    }

    fn append(&mut self, snapshot: Snapshot) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let mut taken: HashSet<StarId> = self.stars.iter().map(|s| s.id).collect();
        let mut fresh = self
            .max_star_id()
            .max(snapshot.stars.iter().map(|s| s.id.get()).max().unwrap_or(0))
            .max(self.next_star_id.saturating_sub(1))
            + 1;

        let mut remap: HashMap<StarId, StarId> = HashMap::new();
        for mut star in snapshot.stars {
            let original = star.id;
            if taken.contains(&star.id) {
                star.id = StarId(fresh);
                fresh += 1;
                summary.remapped += 1;
            }
            taken.insert(star.id);
            remap.entry(original).or_insert(star.id);
            if star.title.is_empty() {
                star.title = default_title(star.id);
            }
            self.stars.push_back(star);
            summary.stars += 1;
        }
        self.next_star_id = fresh.max(self.max_star_id() + 1);

        for mut connection in snapshot.connections {
            let (Some(&from), Some(&to)) = (remap.get(&connection.from), remap.get(&connection.to))
            else {
                summary.dropped += 1;
                continue;
            };
            connection.from = from;
            connection.to = to;
            if self.adopt_connection(connection) {
                summary.connections += 1;
            } else {
                summary.dropped += 1;
            }
        }
        summary
    }

    /// Insert a loaded connection if it is valid, reassigning its id when
    /// it collides with one already present.
    fn adopt_connection(&mut self, mut connection: Connection) -> bool {
        if connection.from == connection.to
            || !self.contains(connection.from)
            || !self.contains(connection.to)
            || self.has_connection(connection.from, connection.to)
        {
            return false;
        }
        if self.connections.iter().any(|c| c.id == connection.id) {
            connection.id = self.allocate_connection_id();
        } else {
            self.last_connection_id = self.last_connection_id.max(connection.id.get());
        }
        self.connections.push_back(connection);
        true
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn index_of(&self, id: StarId) -> Option<usize> {
        self.stars.iter().position(|s| s.id == id)
    }

    fn star_mut(&mut self, id: StarId) -> Option<&mut Star> {
        let index = self.index_of(id)?;
        self.stars.get_mut(index)
    }

    fn max_star_id(&self) -> u64 {
        self.stars.iter().map(|s| s.id.get()).max().unwrap_or(0)
    }

    /// Millisecond timestamp, bumped past the last id handed out.
    fn allocate_connection_id(&mut self) -> ConnectionId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last_connection_id + 1);
        self.last_connection_id = id;
        ConnectionId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;
    use pretty_assertions::assert_eq;

    fn ids(scene: &Scene) -> Vec<u64> {
        scene.stars().iter().map(|s| s.id.get()).collect()
    }

    fn three_stars() -> (Scene, StarId, StarId, StarId) {
        let mut scene = Scene::new();
        let a = scene.add_star(Point::new(0.0, 0.0), Rgb::WHITE).id;
        let b = scene.add_star(Point::new(100.0, 0.0), Rgb::WHITE).id;
        let c = scene.add_star(Point::new(0.0, 100.0), Rgb::WHITE).id;
        (scene, a, b, c)
    }

    #[test]
    fn add_star_assigns_sequential_ids_and_default_title() {
        let (scene, a, b, c) = three_stars();
        assert_eq!((a, b, c), (StarId(1), StarId(2), StarId(3)));
        assert_eq!(scene.star(b).unwrap().title, "Star 2");
        assert_eq!(scene.next_star_id(), StarId(4));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (mut scene, _, _, c) = three_stars();
        scene.delete_star(c);
        let d = scene.add_star(Point::ZERO, Rgb::WHITE);
        assert_eq!(d.id, StarId(4));
    }

    #[test]
    fn delete_cascades_connections() {
        let (mut scene, a, b, c) = three_stars();
        scene.add_connection(a, b, Rgb::WHITE, LineStyle::Solid).unwrap();
        scene.add_connection(b, c, Rgb::WHITE, LineStyle::Solid).unwrap();
        scene.add_connection(a, c, Rgb::WHITE, LineStyle::Solid).unwrap();

        let removed = scene.delete_star(b).unwrap();
        assert_eq!(removed.id, b);
        assert_eq!(scene.connection_count(), 1);
        assert!(scene.has_connection(c, a));
    }

    #[test]
    fn delete_missing_star_is_noop() {
        let (mut scene, a, b, _) = three_stars();
        scene.add_connection(a, b, Rgb::WHITE, LineStyle::Solid);
        let before = scene.clone();
        assert!(scene.delete_star(StarId(99)).is_none());
        assert_eq!(scene, before);
    }

    #[test]
    fn connection_rules() {
        let (mut scene, a, b, _) = three_stars();
        assert!(scene.add_connection(a, a, Rgb::WHITE, LineStyle::Solid).is_none());
        assert!(scene.add_connection(a, StarId(42), Rgb::WHITE, LineStyle::Solid).is_none());
        let first = scene.add_connection(a, b, Rgb::WHITE, LineStyle::Dashed).unwrap();
        assert!(scene.add_connection(b, a, Rgb::WHITE, LineStyle::Solid).is_none());
        assert_eq!(scene.connection_count(), 1);
        assert_eq!(scene.connections()[0].id, first);
    }

    #[test]
    fn connection_ids_are_unique_within_a_millisecond() {
        let mut scene = Scene::new();
        let stars: Vec<StarId> = (0..6)
            .map(|i| scene.add_star(Point::new(i as f64 * 40.0, 0.0), Rgb::WHITE).id)
            .collect();
        let mut conn_ids = Vec::new();
        for pair in stars.windows(2) {
            conn_ids.push(scene.add_connection(pair[0], pair[1], Rgb::WHITE, LineStyle::Solid).unwrap());
        }
        let unique: BTreeSet<_> = conn_ids.iter().collect();
        assert_eq!(unique.len(), conn_ids.len());
        assert!(conn_ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn connect_by_tag_links_shared_tags_only() {
        let mut scene = Scene::new();
        let edit = |tags: &str| StarEdit {
            tags: Some(tags.to_string()),
            ..StarEdit::default()
        };
        let a = scene.add_star(Point::new(0.0, 0.0), Rgb::WHITE).id;
        let b = scene.add_star(Point::new(10.0, 0.0), Rgb::WHITE).id;
        let c = scene.add_star(Point::new(0.0, 10.0), Rgb::WHITE).id;
        scene.update_star(a, &edit("x"));
        scene.update_star(b, &edit("x"));
        scene.update_star(c, &edit("y"));

        assert_eq!(scene.connect_by_tag(Rgb::WHITE, LineStyle::Solid), 1);
        assert!(scene.has_connection(a, b));
        assert_eq!(scene.connect_by_tag(Rgb::WHITE, LineStyle::Solid), 0);
    }

    #[test]
    fn connect_by_tag_counts_overlapping_groups_once() {
        let mut scene = Scene::new();
        let a = scene.add_star(Point::new(0.0, 0.0), Rgb::WHITE).id;
        let b = scene.add_star(Point::new(50.0, 0.0), Rgb::WHITE).id;
        let c = scene.add_star(Point::new(100.0, 0.0), Rgb::WHITE).id;
        for (id, tags) in [(a, "x, y"), (b, "x,y"), (c, "y")] {
            scene.update_star(
                id,
                &StarEdit {
                    tags: Some(tags.to_string()),
                    ..StarEdit::default()
                },
            );
        }
        // x: {a,b}; y: {a,b,c}. a–b is shared by both groups.
        assert_eq!(scene.connect_by_tag(Rgb::WHITE, LineStyle::Solid), 3);
        assert_eq!(scene.connection_count(), 3);
    }

    #[test]
    fn update_star_applies_partial_edits() {
        let (mut scene, a, _, _) = three_stars();
        let changed = scene.update_star(
            a,
            &StarEdit {
                title: Some("   ".into()),
                tags: Some("core, , sun ".into()),
                shape: Some(Shape::Diamond),
                ..StarEdit::default()
            },
        );
        assert!(changed);
        let star = scene.star(a).unwrap();
        assert_eq!(star.title, UNTITLED);
        assert_eq!(star.tags.as_slice(), ["core", "sun"]);
        assert_eq!(star.shape, Shape::Diamond);
        assert_eq!(star.description, "");

        assert!(!scene.update_star(a, &StarEdit::default()));
        assert!(!scene.update_star(StarId(77), &StarEdit::default()));
    }

    #[test]
    fn hit_test_prefers_topmost_and_is_strict() {
        let mut scene = Scene::new();
        let _below = scene.add_star(Point::new(0.0, 0.0), Rgb::WHITE);
        let above = scene.add_star(Point::new(5.0, 0.0), Rgb::WHITE);
        assert_eq!(scene.find_star_at(Point::new(2.0, 0.0)).unwrap().id, above.id);
        assert!(scene.find_star_at(Point::new(20.0, 0.0)).is_none());
        assert_eq!(scene.find_star_at(Point::new(19.9, 0.0)).unwrap().id, above.id);
    }

    #[test]
    fn rect_query_is_closed_and_corner_order_free() {
        let (scene, a, b, _) = three_stars();
        let hits = scene.stars_in_rect(Point::new(100.0, 0.0), Point::new(0.0, 0.0));
        assert_eq!(hits, vec![a, b]);
    }

    #[test]
    fn batch_delete_and_recolor() {
        let (mut scene, a, b, c) = three_stars();
        scene.add_connection(a, b, Rgb::WHITE, LineStyle::Solid);
        scene.add_connection(b, c, Rgb::WHITE, LineStyle::Solid);
        let red = Rgb::new(255, 0, 0);

        assert_eq!(scene.recolor_stars(&BTreeSet::from([a, c]), red), 2);
        assert_eq!(scene.recolor_stars(&BTreeSet::from([a, c]), red), 0);

        assert_eq!(scene.delete_stars(&BTreeSet::from([a, b, StarId(50)])), 2);
        assert_eq!(ids(&scene), vec![3]);
        assert_eq!(scene.connection_count(), 0);
        assert_eq!(scene.star(c).unwrap().color, red);
    }

    #[test]
    fn clear_resets_counter() {
        let (mut scene, ..) = three_stars();
        assert!(scene.clear());
        assert!(scene.is_empty());
        assert_eq!(scene.next_star_id(), StarId(1));
        assert!(!scene.clear());
    }

    #[test]
    fn serialize_preserves_order() {
        let (mut scene, a, b, c) = three_stars();
        scene.add_connection(c, a, Rgb::WHITE, LineStyle::Dotted);
        let snap = scene.serialize();
        assert_eq!(
            snap.stars.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![a, b, c]
        );
        assert_eq!(snap.next_star_id, 4);
        assert_eq!(Scene::from_snapshot(snap.clone()).serialize(), snap);
    }

    #[test]
    fn hydration_sanitizes_bad_data() {
        let json = r#"{
            "stars": [
                {"id": 1, "x": 0, "y": 0, "title": ""},
                {"id": 2, "x": 5, "y": 5},
                {"id": 2, "x": 9, "y": 9}
            ],
            "connections": [
                {"id": 10, "from": 1, "to": 2},
                {"id": 11, "from": 2, "to": 1},
                {"id": 12, "from": 1, "to": 1},
                {"id": 13, "from": 1, "to": 8}
            ]
        }"#;
        let scene = Scene::from_snapshot(Snapshot::from_json(json).unwrap());
        assert_eq!(ids(&scene), vec![1, 2]);
        assert_eq!(scene.star(StarId(1)).unwrap().title, "Star 1");
        assert_eq!(scene.star(StarId(2)).unwrap().x, 5.0);
        assert_eq!(scene.connection_count(), 1);
        assert_eq!(scene.next_star_id(), StarId(3));
    }

    #[test]
    fn append_scenario_keeps_free_ids() {
        let mut scene = Scene::from_snapshot(
            Snapshot::from_json(r#"{"stars": [{"id": 5, "x": 0, "y": 0}]}"#).unwrap(),
        );
        let incoming = Snapshot::from_json(
            r#"{"stars": [{"id": 1, "x": 1, "y": 1}, {"id": 2, "x": 2, "y": 2}]}"#,
        )
        .unwrap();
        let summary = scene.import_snapshot(incoming, ImportMode::Append);
        assert_eq!(summary.stars, 2);
        assert_eq!(summary.remapped, 0);
        assert_eq!(scene.star_count(), 3);
        assert_eq!(scene.next_star_id(), StarId(6));
    }

    #[test]
    fn append_remaps_colliding_ids_and_their_connections() {
        let (mut scene, a, b, _) = three_stars();
        scene.add_connection(a, b, Rgb::WHITE, LineStyle::Solid);
        let incoming = Snapshot::from_json(
            r#"{"stars": [{"id": 1, "x": 500, "y": 0}, {"id": 2, "x": 600, "y": 0}],
                "connections": [{"id": 1, "from": 1, "to": 2}]}"#,
        )
        .unwrap();
        let summary = scene.import_snapshot(incoming, ImportMode::Append);
        assert_eq!(summary.remapped, 2);
        assert_eq!(summary.connections, 1);
        assert_eq!(ids(&scene), vec![1, 2, 3, 4, 5]);
        assert!(scene.has_connection(StarId(4), StarId(5)));
        assert!(scene.has_connection(a, b));
        assert_eq!(scene.next_star_id(), StarId(6));
    }

    #[test]
    fn replace_never_lowers_the_counter() {
        let (mut scene, ..) = three_stars();
        let incoming =
            Snapshot::from_json(r#"{"stars": [{"id": 1, "x": 0, "y": 0}]}"#).unwrap();
        scene.import_snapshot(incoming, ImportMode::Replace);
        assert_eq!(ids(&scene), vec![1]);
        assert_eq!(scene.next_star_id(), StarId(4));
    }

    #[test]
    fn tag_inventory() {
        let (mut scene, a, b, _) = three_stars();
        let tags = |t: &str| StarEdit {
            tags: Some(t.into()),
            ..StarEdit::default()
        };
        scene.update_star(a, &tags("work, home"));
        scene.update_star(b, &tags("work"));
        assert_eq!(
            scene.all_tags().into_iter().collect::<Vec<_>>(),
            vec!["home".to_string(), "work".to_string()]
        );
        assert_eq!(scene.tag_counts()["work"], 2);
    }

    #[test]
    fn bounds_cover_all_centers() {
        let (scene, ..) = three_stars();
        assert_eq!(scene.bounds(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(Scene::new().bounds(), None);
    }
}
