use crate::brush::BrushPreset;
use crate::commands::helpers::{load_for_edit, page_mut};
use crate::commands::{save_with_message, CmdMessage, CmdResult, PageSummary};
use crate::error::{InknoteError, Result};
use crate::model::{Color, Point};
use crate::store::{NotebookStore, StorageBackend};

/// Appends a stroke drawn with the preset named `preset_name`.
///
/// `color` replaces the preset color; a highlighter keeps its translucency,
/// so an opaque override is brought down to the highlighter alpha.
pub fn draw<B: StorageBackend>(
    store: &NotebookStore<B>,
    page_index: usize,
    preset_name: &str,
    points: Vec<Point>,
    color: Option<Color>,
) -> Result<CmdResult> {
    if points.is_empty() {
        return Err(InknoteError::InvalidValue(
            "A stroke needs at least one point".to_string(),
        ));
    }
    if let Some(p) = points
        .iter()
        .find(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(InknoteError::InvalidValue(format!(
            "Point ({}, {}) is not finite",
            p.x, p.y
        )));
    }

    let presets = BrushPreset::defaults();
    let mut preset = BrushPreset::find(&presets, preset_name)
        .cloned()
        .ok_or_else(|| InknoteError::InvalidValue(format!("Unknown brush '{}'", preset_name)))?;
    if let Some(color) = color {
        preset.color = if preset.is_highlighter && color.is_opaque() {
            color.with_alpha(crate::brush::HIGHLIGHTER_ALPHA)
        } else {
            color
        };
    }

    let mut notebook = load_for_edit(store)?;
    let page = page_mut(&mut notebook, page_index)?;
    let point_count = points.len();
    page.add_stroke(preset.stroke(points));
    let stroke_index = page.strokes.len();

    let mut result = CmdResult::default();
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Drew stroke {} on page {} with {} ({} points)",
        stroke_index, page_index, preset.name, point_count
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

/// Deletes one whole stroke (the eraser never splits strokes).
pub fn erase<B: StorageBackend>(
    store: &NotebookStore<B>,
    page_index: usize,
    stroke_index: usize,
) -> Result<CmdResult> {
    let mut notebook = load_for_edit(store)?;
    let page = page_mut(&mut notebook, page_index)?;
    let not_found = InknoteError::StrokeNotFound {
        page: page_index,
        stroke: stroke_index,
    };
    if stroke_index == 0 {
        return Err(not_found);
    }
    page.remove_stroke(stroke_index - 1).ok_or(not_found)?;

    let mut result = CmdResult::default();
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Erased stroke {} from page {}",
        stroke_index, page_index
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}
