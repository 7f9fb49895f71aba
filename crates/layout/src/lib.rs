use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Element {id} has an invalid measured size of {width:.2}x{height:.2}.")]
    NegativeSize {
        id: ElementId,
        width: f32,
        height: f32,
    },
    #[error("Spacing must be finite and non-negative, got {0:.2}.")]
    InvalidSpacing(f32),
    #[error("Element {0} was placed more than once in the same pass.")]
    DuplicateElement(ElementId),
    #[error("Element {0} was placed before the first element of the pass.")]
    PassNotStarted(ElementId),
}

pub(crate) mod engine;
pub use self::engine::{FlowLayoutEngine, FlowPass, layout_sequence};

pub mod config;
pub mod cursor;
pub mod interface;
pub mod output;
pub mod util;

pub use self::config::{FlowConfig, OffsetConvention};
pub use self::cursor::CursorState;
pub use self::interface::{FlowItem, Measure};
pub use self::output::{FlowLayout, Placement};

// Re-export geometry types used by hosts to prevent type mismatches
pub use tagflow_types::{ElementId, Offset, Point, Rect, Size};

#[cfg(test)]
mod test_utils;
