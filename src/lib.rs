//! Wrapping flow layout for tag clouds.
//!
//! The layout algorithm itself lives in `tagflow-layout`; this crate adds the
//! host side: a tag model with a monospace measurer, JSON scenes, and the
//! `tagflow` command line tool.

pub mod error;
pub mod measure;
pub mod scene;

pub use error::FlowError;
pub use measure::{MonospaceMeasurer, Tag};
pub use scene::{MeasuredTag, Scene, SceneOverrides, SceneTag};

pub use tagflow_layout::{
    CursorState, ElementId, FlowConfig, FlowItem, FlowLayout, FlowLayoutEngine, FlowPass,
    LayoutError, Measure, Offset, OffsetConvention, Placement, Point, Rect, Size,
    layout_sequence,
};
