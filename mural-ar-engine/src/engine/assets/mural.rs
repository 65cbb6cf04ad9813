use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Raw mural document as fetched. Validation happens in
/// [`MuralDescription::from_document`], so the loader accepts any JSON object.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
pub struct MuralDocument {
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub figures: Option<Value>,
}

/// Shape errors in a mural payload. All of them leave the mural store empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MuralError {
    #[error("mural document has no figures field")]
    MissingFigures,
    #[error("mural figures field is not a sequence")]
    FiguresNotSequence,
    #[error("figure {index} has no tag")]
    MissingTag { index: usize },
}

/// Caption and detail text attached to one pickable surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureDescription {
    pub tag: String,
    pub caption: String,
    pub detail: String,
}

/// Validated mural: uniform scale plus figures in authored order.
#[derive(Debug, Clone, PartialEq)]
pub struct MuralDescription {
    scale: f32,
    figures: Vec<FigureDescription>,
}

impl MuralDescription {
    pub fn from_document(doc: &MuralDocument) -> Result<Self, MuralError> {
        let figures = doc.figures.as_ref().ok_or(MuralError::MissingFigures)?;
        let entries = match figures {
            Value::Null => return Err(MuralError::MissingFigures),
            Value::Array(entries) => entries,
            _ => return Err(MuralError::FiguresNotSequence),
        };

        let figures = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_figure(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            scale: sanitise_scale(doc.scale),
            figures,
        })
    }

    /// Parse straight from a JSON value, as delivered over RPC or in tests.
    pub fn from_value(value: &Value) -> Result<Self, MuralError> {
        let doc = MuralDocument {
            scale: value.get("scale").and_then(Value::as_f64),
            figures: value.get("figures").cloned(),
        };
        Self::from_document(&doc)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn figures(&self) -> &[FigureDescription] {
        &self.figures
    }

    /// First figure whose tag matches exactly.
    pub fn figure(&self, tag: &str) -> Option<&FigureDescription> {
        self.figures.iter().find(|figure| figure.tag == tag)
    }
}

fn parse_figure(index: usize, entry: &Value) -> Result<FigureDescription, MuralError> {
    let tag = entry
        .get("tag")
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
        .ok_or(MuralError::MissingTag { index })?;

    let text = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(FigureDescription {
        tag: tag.to_string(),
        caption: text("caption"),
        detail: text("detail"),
    })
}

// Absent, zero, negative or non-finite scales all mean "unscaled".
fn sanitise_scale(scale: Option<f64>) -> f32 {
    match scale {
        Some(s) if s.is_finite() && s > 0.0 => s as f32,
        _ => 1.0,
    }
}

/// Currently loaded mural, if any. Empty until the document resolves and
/// permanently empty if it fails to load or validate.
#[derive(Resource, Debug, Default)]
pub struct MuralStore {
    mural: Option<MuralDescription>,
}

impl MuralStore {
    pub fn set(&mut self, mural: MuralDescription) {
        self.mural = Some(mural);
    }

    pub fn get(&self) -> Option<&MuralDescription> {
        self.mural.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.mural.is_some()
    }

    /// Not-yet-loaded behaves exactly like an unknown tag.
    pub fn figure(&self, tag: &str) -> Option<&FigureDescription> {
        self.mural.as_ref()?.figure(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_figures_and_defaults_scale() {
        let mural = MuralDescription::from_value(&json!({
            "figures": [{"tag": "fig1", "caption": "A", "detail": "Long A"}]
        }))
        .unwrap();

        assert_eq!(mural.scale(), 1.0);
        let figure = mural.figure("fig1").unwrap();
        assert_eq!(figure.caption, "A");
        assert_eq!(figure.detail, "Long A");
        assert!(mural.figure("fig2").is_none());
    }

    #[test]
    fn keeps_authored_scale() {
        let mural = MuralDescription::from_value(&json!({"scale": 2.5, "figures": []})).unwrap();
        assert_eq!(mural.scale(), 2.5);
    }

    #[test]
    fn non_positive_scale_is_ignored() {
        let mural = MuralDescription::from_value(&json!({"scale": 0, "figures": []})).unwrap();
        assert_eq!(mural.scale(), 1.0);
    }

    #[test]
    fn rejects_missing_figures() {
        assert_eq!(
            MuralDescription::from_value(&json!({"scale": 1})),
            Err(MuralError::MissingFigures)
        );
        assert_eq!(
            MuralDescription::from_value(&json!({"figures": null})),
            Err(MuralError::MissingFigures)
        );
    }

    #[test]
    fn rejects_non_sequence_figures() {
        assert_eq!(
            MuralDescription::from_value(&json!({"figures": {"tag": "fig1"}})),
            Err(MuralError::FiguresNotSequence)
        );
    }

    #[test]
    fn rejects_figure_without_tag() {
        let result = MuralDescription::from_value(&json!({
            "figures": [{"tag": "fig1"}, {"caption": "orphan"}]
        }));
        assert_eq!(result, Err(MuralError::MissingTag { index: 1 }));
    }

    #[test]
    fn duplicate_tags_resolve_to_first() {
        let mural = MuralDescription::from_value(&json!({
            "figures": [
                {"tag": "twin", "caption": "first"},
                {"tag": "twin", "caption": "second"}
            ]
        }))
        .unwrap();
        assert_eq!(mural.figure("twin").unwrap().caption, "first");
    }

    #[test]
    fn empty_store_answers_like_a_miss() {
        let store = MuralStore::default();
        assert!(!store.is_loaded());
        assert!(store.figure("fig1").is_none());
    }
}
