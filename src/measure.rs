//! A measurement collaborator for plain text tags.
//!
//! Real renderers measure shaped text. For previews, tests and the CLI a
//! fixed-advance estimate is enough: every character is `char_width` wide and
//! the tag is padded like a rounded label.

use serde::{Deserialize, Serialize};
use tagflow_layout::{ElementId, FlowItem, Measure, Size};

/// A labelled tag in a tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: ElementId,
    pub title: String,
}

impl Tag {
    pub fn new(id: impl Into<ElementId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl FlowItem for Tag {
    fn id(&self) -> ElementId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonospaceMeasurer {
    /// Advance of a single character.
    pub char_width: f32,
    pub line_height: f32,
    /// Padding on the left and on the right of the label.
    pub padding_x: f32,
    /// Padding above and below the label.
    pub padding_y: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding_x: 10.0,
            padding_y: 5.0,
        }
    }
}

impl MonospaceMeasurer {
    pub fn measure_title(&self, title: &str) -> Size {
        let chars = title.chars().count() as f32;
        Size::new(
            chars * self.char_width + 2.0 * self.padding_x,
            self.line_height + 2.0 * self.padding_y,
        )
    }
}

impl Measure<Tag> for MonospaceMeasurer {
    fn measure(&self, item: &Tag) -> Size {
        self.measure_title(&item.title)
    }
}

impl Measure<str> for MonospaceMeasurer {
    fn measure(&self, item: &str) -> Size {
        self.measure_title(item)
    }
}
