//! # Domain Model: Notebooks, Pages and Strokes
//!
//! This module defines the in-memory representation of captured ink:
//! [`Notebook`] owns an ordered list of [`Page`]s, and every page owns an
//! ordered list of [`Stroke`]s.
//!
//! ## Ordering
//!
//! Order is part of the document's meaning, so everything is a `Vec`:
//! - Page order is tab order. It is restored exactly on load.
//! - Stroke order is draw order. Strokes are replayed, never re-sorted.
//! - Point order is capture order. Points are never re-sampled.
//!
//! ## Mutability
//!
//! Strokes are immutable once captured. The only edits are whole-stroke
//! deletion (eraser) and whole-page clearing.
//!
//! ## Validation
//!
//! None at this layer. Rules such as "a notebook always shows at least one
//! page" belong to the caller (see `commands::pages`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InknoteError;

pub const DEFAULT_NOTEBOOK_NAME: &str = "My Notebook";

/// A single captured sample. Only the position is guaranteed to round-trip;
/// pressure is kept when the capture surface provides it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }

    pub fn with_pressure(x: f64, y: f64, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Parses `#RRGGBB` (opaque) or `#RRGGBBAA`. The leading `#` is optional.
impl FromStr for Color {
    type Err = InknoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(InknoteError::InvalidValue(format!(
                "Invalid color '{}': expected #RRGGBB or #RRGGBBAA",
                s
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| InknoteError::InvalidValue(format!("Invalid color '{}'", s)))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// One continuous pen-down-to-pen-up ink mark.
///
/// `width` and `height` describe the tool footprint, which is not always
/// round (calligraphy and highlighter tips are not).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    #[serde(rename = "isHighlighter")]
    pub is_highlighter: bool,
}

impl Stroke {
    pub fn new(
        points: Vec<Point>,
        width: f64,
        height: f64,
        color: Color,
        is_highlighter: bool,
    ) -> Self {
        Self {
            points,
            width,
            height,
            color,
            is_highlighter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub strokes: Vec<Stroke>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            strokes: Vec::new(),
        }
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes the stroke at `index` (0-based), preserving the order of the rest.
    pub fn remove_stroke(&mut self, index: usize) -> Option<Stroke> {
        if index < self.strokes.len() {
            Some(self.strokes.remove(index))
        } else {
            None
        }
    }

    /// Removes every stroke and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        self.strokes.clear();
        removed
    }

    pub fn highlighter_count(&self) -> usize {
        self.strokes.iter().filter(|s| s.is_highlighter).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub name: String,
    pub pages: Vec<Page>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::with_default_page(DEFAULT_NOTEBOOK_NAME)
    }
}

impl Notebook {
    /// A notebook with no pages. Callers that display it must add one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: Vec::new(),
        }
    }

    /// The shape of a first-run notebook: one empty page titled "Page 1".
    pub fn with_default_page(name: impl Into<String>) -> Self {
        let mut notebook = Self::new(name);
        let title = notebook.next_page_title();
        notebook.add_page(title);
        notebook
    }

    pub fn add_page(&mut self, title: impl Into<String>) -> &mut Page {
        self.pages.push(Page::new(title));
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn remove_page(&mut self, index: usize) -> Option<Page> {
        if index < self.pages.len() {
            Some(self.pages.remove(index))
        } else {
            None
        }
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn next_page_title(&self) -> String {
        format!("Page {}", self.pages.len() + 1)
    }

    pub fn stroke_count(&self) -> usize {
        self.pages.iter().map(|p| p.strokes.len()).sum()
    }

    pub fn highlighter_count(&self) -> usize {
        self.pages.iter().map(Page::highlighter_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x0: f64, x1: f64) -> Stroke {
        Stroke::new(
            vec![Point::new(x0, 0.0), Point::new(x1, 0.0)],
            2.0,
            2.0,
            Color::BLACK,
            false,
        )
    }

    #[test]
    fn test_default_notebook_has_one_page() {
        let nb = Notebook::default();
        assert_eq!(nb.name, DEFAULT_NOTEBOOK_NAME);
        assert_eq!(nb.pages.len(), 1);
        assert_eq!(nb.pages[0].title, "Page 1");
        assert!(nb.pages[0].strokes.is_empty());
    }

    #[test]
    fn test_new_notebook_is_empty() {
        let nb = Notebook::new("Blank");
        assert!(nb.pages.is_empty());
        assert_eq!(nb.next_page_title(), "Page 1");
    }

    #[test]
    fn test_add_page_appends_in_order() {
        let mut nb = Notebook::new("Ordered");
        nb.add_page("A");
        nb.add_page("B");
        nb.add_page("C");
        let titles: Vec<_> = nb.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(nb.next_page_title(), "Page 4");
    }

    #[test]
    fn test_remove_page_keeps_order_of_rest() {
        let mut nb = Notebook::new("Ordered");
        nb.add_page("A");
        nb.add_page("B");
        nb.add_page("C");

        let removed = nb.remove_page(1).unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<_> = nb.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_page_out_of_range() {
        let mut nb = Notebook::default();
        assert!(nb.remove_page(5).is_none());
        assert_eq!(nb.pages.len(), 1);
    }

    #[test]
    fn test_model_allows_removing_last_page() {
        // The "never zero pages" rule lives in the command layer.
        let mut nb = Notebook::default();
        assert!(nb.remove_page(0).is_some());
        assert!(nb.pages.is_empty());
    }

    #[test]
    fn test_stroke_removal_and_clear() {
        let mut page = Page::new("Sketch");
        page.add_stroke(line(0.0, 1.0));
        page.add_stroke(line(1.0, 2.0));
        page.add_stroke(line(2.0, 3.0));

        let erased = page.remove_stroke(0).unwrap();
        assert_eq!(erased.points[0].x, 0.0);
        assert_eq!(page.strokes[0].points[0].x, 1.0);
        assert!(page.remove_stroke(9).is_none());

        assert_eq!(page.clear(), 2);
        assert!(page.strokes.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut nb = Notebook::default();
        nb.pages[0].add_stroke(line(0.0, 1.0));
        let mut marker = line(0.0, 5.0);
        marker.is_highlighter = true;
        nb.add_page("Second").add_stroke(marker);

        assert_eq!(nb.stroke_count(), 2);
        assert_eq!(nb.highlighter_count(), 1);
    }

    #[test]
    fn test_color_parse_rgb_and_rgba() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!(
            "ffff0080".parse::<Color>().unwrap(),
            Color::rgba(255, 255, 0, 0x80)
        );
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgba(0, 120, 215, 255).to_string(), "#0078D7FF");
        assert!(Color::BLACK.is_opaque());
        assert!(!Color::YELLOW.with_alpha(100).is_opaque());
    }

    #[test]
    fn test_stroke_json_uses_highlighter_key() {
        let mut s = line(0.0, 1.0);
        s.is_highlighter = true;
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["isHighlighter"], serde_json::Value::Bool(true));
        assert!(json["points"][0].get("pressure").is_none());
    }
}
