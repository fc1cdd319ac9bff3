use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Species palette
// ---------------------------------------------------------------------------

/// Hue of the first series; the rest step evenly around the wheel.
const BASE_HUE: f32 = 210.0;

/// `n` distinct marker colours, starting at blue.
pub fn species_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let rgb: Srgb = Hsl::new(BASE_HUE + step * i as f32, 0.65, 0.5).into_color();
            Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
        })
        .collect()
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Histogram bar fill (sky blue).
pub const HISTOGRAM_FILL: Color32 = Color32::from_rgb(135, 206, 235);

/// Histogram bar outline.
pub const HISTOGRAM_EDGE: Color32 = Color32::BLACK;

/// Opacity applied to scatter markers.
pub const MARKER_ALPHA: f32 = 0.7;

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species present in the dataset to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given species, in order.
    pub fn new(species: &[Species]) -> Self {
        let palette = species_palette(species.len());
        let mapping: BTreeMap<Species, Color32> =
            species.iter().copied().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Colour for a scatter marker: the species colour at marker opacity.
    pub fn marker_color(&self, species: Species) -> Color32 {
        self.color_for(species).gamma_multiply(MARKER_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let p = species_palette(3);
        assert_eq!(p.len(), 3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
        assert_ne!(p[0], p[2]);
        assert!(species_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_covers_species() {
        let cm = ColorMap::new(&Species::ALL);
        assert_ne!(cm.color_for(Species::Setosa), cm.color_for(Species::Virginica));
        for species in Species::ALL {
            assert_ne!(cm.color_for(species), Color32::GRAY);
        }
    }

    #[test]
    fn test_first_species_is_blue() {
        let c = species_palette(3)[0];
        assert!(c.b() > c.r() && c.b() > c.g(), "{c:?}");
    }

    #[test]
    fn test_missing_species_falls_back_to_gray() {
        let cm = ColorMap::new(&[Species::Setosa]);
        assert_eq!(cm.color_for(Species::Virginica), Color32::GRAY);
    }

    #[test]
    fn test_marker_color_is_translucent() {
        let cm = ColorMap::new(&Species::ALL);
        assert!(cm.marker_color(Species::Setosa).a() < 255);
    }
}
