//! # Serialization Codec
//!
//! Converts a [`Notebook`] to and from pretty-printed JSON text.
//!
//! ## Document Shape
//!
//! ```text
//! {
//!   "version": 1,
//!   "name": "My Notebook",
//!   "pages": [
//!     { "title": "Page 1",
//!       "strokes": [
//!         { "points": [{"x": 1.0, "y": 2.0, "pressure": 0.5}],
//!           "width": 2.0, "height": 2.0,
//!           "color": {"r": 0, "g": 0, "b": 0, "a": 255},
//!           "isHighlighter": false } ] } ]
//! }
//! ```
//!
//! ## Compatibility Rules
//!
//! - Unknown fields are ignored on read, so newer attributes never invalidate
//!   an older reader's view of the fields it knows.
//! - A missing `version` means the document predates the tag and is read as
//!   version 1.
//! - A version newer than [`FORMAT_VERSION`] is rejected as malformed: this
//!   build cannot know what the newer writer meant.
//!
//! JSON has no spelling for NaN or infinity, so [`serialize`] refuses
//! non-finite numbers rather than letting them degrade to `null`.

use serde::de::Error as _;
use serde::Serialize;
use serde_json::Value;

use crate::error::{InknoteError, Result};
use crate::model::Notebook;

pub const FORMAT_VERSION: u64 = 1;
const VERSION_FIELD: &str = "version";
const LEGACY_VERSION: u64 = 1;

#[derive(Serialize)]
struct Document<'a> {
    version: u64,
    #[serde(flatten)]
    notebook: &'a Notebook,
}

pub fn serialize(notebook: &Notebook) -> Result<String> {
    check_finite(notebook)?;
    let doc = Document {
        version: FORMAT_VERSION,
        notebook,
    };
    serde_json::to_string_pretty(&doc).map_err(InknoteError::MalformedDocument)
}

pub fn deserialize(text: &str) -> Result<Notebook> {
    let value: Value = serde_json::from_str(text).map_err(InknoteError::MalformedDocument)?;

    let version = match value.get(VERSION_FIELD) {
        None => LEGACY_VERSION,
        Some(v) => v.as_u64().ok_or_else(|| {
            malformed(format!("field `{}` must be a non-negative integer", VERSION_FIELD))
        })?,
    };
    if version > FORMAT_VERSION {
        return Err(malformed(format!(
            "unsupported format version {} (this build reads up to {})",
            version, FORMAT_VERSION
        )));
    }

    serde_json::from_value(value).map_err(InknoteError::MalformedDocument)
}

fn malformed(msg: String) -> InknoteError {
    InknoteError::MalformedDocument(serde_json::Error::custom(msg))
}

fn check_finite(notebook: &Notebook) -> Result<()> {
    for (p, page) in notebook.pages.iter().enumerate() {
        for (s, stroke) in page.strokes.iter().enumerate() {
            let at = || format!("page {} stroke {}", p + 1, s + 1);
            if !stroke.width.is_finite() || !stroke.height.is_finite() {
                return Err(InknoteError::InvalidValue(format!(
                    "non-finite stroke size at {}",
                    at()
                )));
            }
            let bad_point = stroke.points.iter().any(|pt| {
                !pt.x.is_finite() || !pt.y.is_finite() || pt.pressure.is_some_and(|v| !v.is_finite())
            });
            if bad_point {
                return Err(InknoteError::InvalidValue(format!(
                    "non-finite point at {}",
                    at()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Point, Stroke};

    fn sample() -> Notebook {
        let mut nb = Notebook::new("Field notes");
        nb.add_page("A").add_stroke(Stroke::new(
            vec![Point::with_pressure(0.5, 1.25, 0.75), Point::new(-3.0, 1e-9)],
            2.0,
            2.0,
            Color::BLACK,
            false,
        ));
        nb.add_page("B");
        nb
    }

    #[test]
    fn test_roundtrip() {
        let nb = sample();
        let text = serialize(&nb).unwrap();
        assert_eq!(deserialize(&text).unwrap(), nb);
    }

    #[test]
    fn test_serialized_text_carries_version_first() {
        let text = serialize(&sample()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], FORMAT_VERSION);
        assert!(text.trim_start().starts_with("{\n  \"version\": 1"));
    }

    #[test]
    fn test_missing_version_is_legacy() {
        let text = r#"{"name": "Old", "pages": [{"title": "Page 1", "strokes": []}]}"#;
        let nb = deserialize(text).unwrap();
        assert_eq!(nb.name, "Old");
        assert_eq!(nb.pages.len(), 1);
    }

    #[test]
    fn test_future_version_rejected() {
        let text = r#"{"version": 99, "name": "New", "pages": []}"#;
        let err = deserialize(text).unwrap_err();
        assert!(matches!(err, InknoteError::MalformedDocument(_)));
        assert!(err.to_string().contains("unsupported format version 99"));
    }

    #[test]
    fn test_non_integer_version_rejected() {
        let text = r#"{"version": "one", "name": "X", "pages": []}"#;
        assert!(matches!(
            deserialize(text),
            Err(InknoteError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let text = r#"{
            "version": 1, "name": "X", "theme": "dark",
            "pages": [{"title": "P", "tabColor": "red", "strokes": [{
                "points": [{"x": 1, "y": 2, "tilt": 30}],
                "width": 1, "height": 1, "fitToCurve": true,
                "color": {"r": 1, "g": 2, "b": 3, "a": 4},
                "isHighlighter": true
            }]}]
        }"#;
        let nb = deserialize(text).unwrap();
        let stroke = &nb.pages[0].strokes[0];
        assert_eq!(stroke.points[0], Point::new(1.0, 2.0));
        assert_eq!(stroke.color, Color::rgba(1, 2, 3, 4));
        assert!(stroke.is_highlighter);
    }

    #[test]
    fn test_missing_required_field() {
        let text = r#"{"version": 1, "pages": []}"#;
        assert!(matches!(
            deserialize(text),
            Err(InknoteError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_wrong_type_and_range() {
        let wrong_type = r#"{"name": "X", "pages": "nope"}"#;
        assert!(deserialize(wrong_type).is_err());

        let out_of_range = r#"{"name": "X", "pages": [{"title": "P", "strokes": [{
            "points": [], "width": 1, "height": 1,
            "color": {"r": 300, "g": 0, "b": 0, "a": 0}, "isHighlighter": false}]}]}"#;
        assert!(deserialize(out_of_range).is_err());
    }

    #[test]
    fn test_syntax_error_and_non_object() {
        assert!(matches!(
            deserialize("{not json"),
            Err(InknoteError::MalformedDocument(_))
        ));
        assert!(matches!(
            deserialize("[1, 2, 3]"),
            Err(InknoteError::MalformedDocument(_))
        ));
        assert!(deserialize("").is_err());
    }

    #[test]
    fn test_nan_refused_on_serialize() {
        let mut nb = sample();
        nb.pages[0].strokes[0].points[1].y = f64::NAN;
        assert!(matches!(
            serialize(&nb),
            Err(InknoteError::InvalidValue(_))
        ));

        let mut nb = sample();
        nb.pages[0].strokes[0].width = f64::INFINITY;
        assert!(matches!(
            serialize(&nb),
            Err(InknoteError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_serialize_is_stable() {
        let nb = sample();
        assert_eq!(serialize(&nb).unwrap(), serialize(&nb).unwrap());
    }
}
