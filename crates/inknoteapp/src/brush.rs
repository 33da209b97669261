//! Brush presets.
//!
//! Presets are process configuration, not document state: they are never
//! written into a notebook file. A stroke copies the preset's attributes at
//! the moment it is drawn, so changing a preset later never alters old ink.

use crate::model::{Color, Point, Stroke};

/// Alpha applied to highlighter presets so the ink underneath stays visible.
pub const HIGHLIGHTER_ALPHA: u8 = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct BrushPreset {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub is_highlighter: bool,
}

impl BrushPreset {
    pub fn new(name: impl Into<String>, width: f64, height: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            color,
            is_highlighter: false,
        }
    }

    pub fn highlighter(name: impl Into<String>, width: f64, height: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            color: color.with_alpha(HIGHLIGHTER_ALPHA),
            is_highlighter: true,
        }
    }

    /// Builds a stroke from captured points using this preset's attributes.
    pub fn stroke(&self, points: Vec<Point>) -> Stroke {
        Stroke::new(
            points,
            self.width,
            self.height,
            self.color,
            self.is_highlighter,
        )
    }

    /// The built-in presets, in toolbar order.
    pub fn defaults() -> Vec<BrushPreset> {
        vec![
            BrushPreset::new("pen", 2.0, 2.0, Color::BLACK),
            BrushPreset::new("marker", 8.0, 8.0, Color::rgb(0, 120, 215)),
            BrushPreset::highlighter("highlighter", 15.0, 4.0, Color::YELLOW),
            BrushPreset::new("pencil", 2.0, 2.0, Color::GRAY),
            BrushPreset::new("red-marker", 5.0, 5.0, Color::RED),
        ]
    }

    /// Case-insensitive lookup among `presets`.
    pub fn find<'a>(presets: &'a [BrushPreset], name: &str) -> Option<&'a BrushPreset> {
        presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
