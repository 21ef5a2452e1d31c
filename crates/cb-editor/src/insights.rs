//! Read-only queries over a scene: search and statistics.

use cb_core::{Scene, Star, StarId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Stars whose title or any tag contains `query`, case-insensitively.
/// A blank query matches nothing.
pub fn search(scene: &Scene, query: &str) -> Vec<StarId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    scene
        .stars()
        .iter()
        .filter(|star| {
            star.title.to_lowercase().contains(&query)
                || star.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .map(|star| star.id)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSummary {
    pub id: StarId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Star> for StarSummary {
    fn from(star: &Star) -> Self {
        Self {
            id: star.id,
            title: star.title.clone(),
            created_at: star.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_stars: usize,
    pub total_connections: usize,
    /// Connections per star; zero for an empty scene.
    pub average_connections: f64,
    pub most_connected: Option<(StarSummary, usize)>,
    pub unique_tags: usize,
    pub most_used_tag: Option<(String, usize)>,
    pub oldest: Option<StarSummary>,
    pub newest: Option<StarSummary>,
}

impl Stats {
    pub fn compute(scene: &Scene) -> Self {
        let total_stars = scene.star_count();
        let total_connections = scene.connection_count();
        let average_connections = if total_stars == 0 {
            0.0
        } else {
            total_connections as f64 / total_stars as f64
        };

        // Ties go to the earliest star in scene order
        let mut most_connected: Option<(&Star, usize)> = None;
        for star in scene.stars().iter() {
            let degree = scene.degree(star.id);
            if most_connected.is_none_or(|(_, best)| degree > best) {
                most_connected = Some((star, degree));
            }
        }

        // Ties go to the tag seen first
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in scene.stars().iter().flat_map(|s| s.tags.iter()) {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag);
            }
            *count += 1;
        }
        let mut most_used_tag: Option<(&str, usize)> = None;
        for tag in &order {
            let count = counts[tag];
            if most_used_tag.is_none_or(|(_, best)| count > best) {
                most_used_tag = Some((*tag, count));
            }
        }

        let mut by_age: Vec<&Star> = scene.stars().iter().collect();
        by_age.sort_by_key(|s| s.created_at);

        Self {
            total_stars,
            total_connections,
            average_connections,
            most_connected: most_connected.map(|(s, d)| (s.into(), d)),
            unique_tags: order.len(),
            most_used_tag: most_used_tag.map(|(t, c)| (t.to_string(), c)),
            oldest: by_age.first().map(|s| (*s).into()),
            newest: by_age.last().map(|s| (*s).into()),
        }
    }
}
