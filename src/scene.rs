//! JSON scenes: a container width, flow settings and a list of tags.
//!
//! ```json
//! { "width": 300, "spacing": 8,
//!   "tags": [ { "id": 1, "width": 40, "height": 20 },
//!             { "id": 2, "title": "Heavy Metal" } ] }
//! ```
//!
//! Tags carrying both `width` and `height` are taken as already measured.
//! Any other tag with a `title` goes through the scene's
//! [`MonospaceMeasurer`].

use crate::error::FlowError;
use crate::measure::MonospaceMeasurer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tagflow_layout::{
    ElementId, FlowConfig, FlowItem, FlowLayout, OffsetConvention, Size, layout_sequence,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Width of the container the tags flow into.
    pub width: f32,
    #[serde(flatten)]
    pub config: FlowConfig,
    #[serde(default)]
    pub measurer: MonospaceMeasurer,
    pub tags: Vec<SceneTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTag {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Settings that take precedence over the ones stored in a scene, such as
/// command line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneOverrides {
    pub width: Option<f32>,
    pub spacing: Option<f32>,
    pub convention: Option<OffsetConvention>,
    /// Turns strict mode on. A scene that is already strict stays strict.
    pub strict: bool,
}

/// A scene tag with its size resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredTag {
    pub id: ElementId,
    pub size: Size,
}

impl FlowItem for MeasuredTag {
    fn id(&self) -> ElementId {
        self.id
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        log::debug!("loading scene from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Resolves every tag's size, in sequence order.
    pub fn measure(&self) -> Result<Vec<MeasuredTag>, FlowError> {
        self.tags
            .iter()
            .map(|tag| {
                let size = match (tag.width, tag.height, &tag.title) {
                    (Some(width), Some(height), _) => Size::new(width, height),
                    (_, _, Some(title)) => self.measurer.measure_title(title),
                    _ => {
                        return Err(FlowError::InvalidScene(format!(
                            "tag {} has no title and needs both width and height",
                            tag.id
                        )));
                    }
                };
                Ok(MeasuredTag { id: tag.id, size })
            })
            .collect()
    }

    pub fn apply(&mut self, overrides: &SceneOverrides) {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(spacing) = overrides.spacing {
            self.config.spacing = spacing;
        }
        if let Some(convention) = overrides.convention {
            self.config.convention = convention;
        }
        self.config.strict |= overrides.strict;
    }

    /// Measures the tags and runs one flow pass over them.
    pub fn layout(&self) -> Result<FlowLayout, FlowError> {
        let tags = self.measure()?;
        let layout = layout_sequence(self.config, &tags, &|tag: &MeasuredTag| tag.size, self.width)?;
        log::info!(
            "laid out {} tags in {} rows, container height {:.2}",
            layout.len(),
            layout.row_count(),
            layout.container_height
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flattened_config() {
        let scene = Scene::from_json(
            r#"{ "width": 120, "spacing": 4, "convention": "delta",
                 "tags": [ { "id": 1, "width": 10, "height": 10 } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.config.spacing, 4.0);
        assert_eq!(scene.config.convention, OffsetConvention::Delta);
        assert!(!scene.config.strict);
        assert_eq!(scene.measurer, MonospaceMeasurer::default());
    }

    #[test]
    fn test_measures_titles_and_explicit_sizes() {
        let scene = Scene::from_json(
            r#"{ "width": 120,
                 "tags": [ { "id": 1, "width": 10, "height": 12 },
                           { "id": 2, "title": "Punk" } ] }"#,
        )
        .unwrap();
        let tags = scene.measure().unwrap();
        assert_eq!(tags[0].size, Size::new(10.0, 12.0));
        assert_eq!(tags[1].size, Size::new(48.0, 26.0));
    }

    #[test]
    fn test_partial_size_falls_back_to_title() {
        let scene = Scene::from_json(
            r#"{ "width": 120, "tags": [ { "id": 3, "title": "Punk", "width": 10 } ] }"#,
        )
        .unwrap();
        let tags = scene.measure().unwrap();
        assert_eq!(tags[0].size, Size::new(48.0, 26.0));
    }

    #[test]
    fn test_rejects_unsized_untitled_tag() {
        let scene = Scene::from_json(r#"{ "width": 120, "tags": [ { "id": 7, "width": 10 } ] }"#).unwrap();
        let err = scene.measure().unwrap_err();
        assert!(matches!(err, FlowError::InvalidScene(msg) if msg.contains("#7") && msg.contains("no title")));
    }
}
