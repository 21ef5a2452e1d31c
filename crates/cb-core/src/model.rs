//! Core data model for constellations.
//!
//! A constellation is a flat list of `Star`s (the nodes) and `Connection`s
//! (undirected edges between two stars). Stars live in world space; the
//! viewport transform in [`crate::transform`] maps them to the screen.
//! List order is paint order: later stars are drawn on top of earlier ones
//! and win hit tests.

use crate::id::{ConnectionId, StarId};
use chrono::{DateTime, Utc};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

// ─── Colors ──────────────────────────────────────────────────────────────

/// 24-bit RGB color. Serialized as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string with the given alpha.
    pub fn to_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

// ─── Shapes & line styles ────────────────────────────────────────────────

/// The closed set of star glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Diamond,
    Hexagon,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Diamond, Shape::Hexagon, Shape::Star];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Diamond => "diamond",
            Shape::Hexagon => "hexagon",
            Shape::Star => "star",
        }
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| format!("unknown shape `{s}`"))
    }
}

/// Stroke pattern of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(LineStyle::Solid),
            "dashed" => Ok(LineStyle::Dashed),
            "dotted" => Ok(LineStyle::Dotted),
            _ => Err(format!("unknown line style `{s}`")),
        }
    }
}

// ─── Stars & connections ─────────────────────────────────────────────────

/// Tag list. Most stars carry zero to two tags.
pub type Tags = SmallVec<[String; 2]>;

/// A labeled point in the constellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub id: StarId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Star {
    pub fn new(id: StarId, position: Point, color: Rgb) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            color,
            title: default_title(id),
            description: String::new(),
            tags: Tags::new(),
            shape: Shape::Circle,
            created_at: Utc::now(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Title given to freshly created stars.
pub fn default_title(id: StarId) -> String {
    format!("Star {id}")
}

/// An undirected link between two stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from: StarId,
    pub to: StarId,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub style: LineStyle,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Whether this connection links `a` and `b`, in either direction.
    pub fn joins(&self, a: StarId, b: StarId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: StarId) -> bool {
        self.from == id || self.to == id
    }
}

// ─── Edits ───────────────────────────────────────────────────────────────

/// Partial update applied by the star editor. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw comma-separated tag text, as typed.
    pub tags: Option<String>,
    pub shape: Option<Shape>,
}

/// Title used when the editor is saved with an empty title.
pub const UNTITLED: &str = "Untitled";

/// Split comma-separated tag text, trimming and dropping empty entries.
pub fn parse_tags(raw: &str) -> Tags {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
