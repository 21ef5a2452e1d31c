//! Editor tuning knobs.
//!
//! Every field has a default, so a host can pass a partial JSON object
//! (or nothing at all) and override only what it cares about.

use cb_core::Rgb;
use cb_core::history::DEFAULT_CAPACITY;
use cb_core::scene::HIT_RADIUS;
use cb_core::transform::{MAX_ZOOM, MIN_ZOOM, MINIMAP_SCALE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Wheel factor when scrolling up.
    pub wheel_zoom_in: f64,
    /// Wheel factor when scrolling down.
    pub wheel_zoom_out: f64,
    /// Zoom buttons multiply or divide by this, anchored at the canvas center.
    pub button_zoom: f64,
    pub history_capacity: usize,
    /// World units.
    pub hit_radius: f64,
    pub minimap_scale: f64,
    /// Screen margin kept clear when placing a star at random.
    pub placement_margin: f64,
    pub storage_key: String,
    pub theme_key: String,
    /// Query parameter carrying a share payload.
    pub share_param: String,
    pub seed: u64,
    /// Swatches offered by the color picker. The first is the default brush.
    pub palette: Vec<Rgb>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            button_zoom: 1.25,
            history_capacity: DEFAULT_CAPACITY,
            hit_radius: HIT_RADIUS,
            minimap_scale: MINIMAP_SCALE,
            placement_margin: 50.0,
            storage_key: "constellationBuilderData".into(),
            theme_key: "constellationBuilderTheme".into(),
            share_param: "constellation".into(),
            seed: 0x5EED,
            palette: vec![
                Rgb::new(0xff, 0xff, 0xff),
                Rgb::new(0xff, 0xd7, 0x00),
                Rgb::new(0x00, 0xbf, 0xff),
                Rgb::new(0xff, 0x6b, 0x6b),
                Rgb::new(0x98, 0xfb, 0x98),
                Rgb::new(0xdd, 0xa0, 0xdd),
            ],
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn default_color(&self) -> Rgb {
        self.palette.first().copied().unwrap_or(Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r##"{ "maxZoom": 8, "seed": 7, "palette": ["#123456"] }"##).unwrap();
        assert_eq!(config.max_zoom, 8.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.min_zoom, 0.25);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.storage_key, "constellationBuilderData");
        assert_eq!(config.default_color(), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let config = EditorConfig {
            palette: Vec::new(),
            ..EditorConfig::default()
        };
        assert_eq!(config.default_color(), Rgb::WHITE);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(EditorConfig::from_json("{ \"minZoom\": \"tiny\" }").is_err());
    }
}
