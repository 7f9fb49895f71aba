//! Output types from the flow engine.
//!
//! A [`Placement`] is produced for every element as it is placed; a finished
//! pass collects them into a [`FlowLayout`] together with the container
//! height the host should apply.

use crate::config::OffsetConvention;
use serde::Serialize;
use tagflow_types::{ElementId, Offset, Point, Rect, Size};

/// Positioning decision for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id: ElementId,
    /// Offset in the engine's configured convention.
    pub offset: Offset,
    /// Absolute top-left coordinate, regardless of convention.
    pub origin: Point,
    pub size: Size,
    /// Zero-based row index within the pass.
    pub row: usize,
}

impl Placement {
    pub(crate) fn new(id: ElementId, origin: Point, size: Size, row: usize, convention: OffsetConvention) -> Self {
        Self {
            id,
            offset: offset_for(origin, convention),
            origin,
            size,
            row,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin, self.size)
    }

    /// Re-expresses the placement under another convention.
    pub fn offset_in(&self, convention: OffsetConvention) -> Offset {
        offset_for(self.origin, convention)
    }
}

fn offset_for(origin: Point, convention: OffsetConvention) -> Offset {
    match convention {
        OffsetConvention::Absolute => Offset::from(origin),
        // Subtracting from zero keeps row starts at +0.0 rather than -0.0.
        OffsetConvention::Delta => Offset::new(0.0 - origin.x, 0.0 - origin.y),
    }
}

/// The committed result of one full pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowLayout {
    /// Placements in sequence order.
    pub placements: Vec<Placement>,
    /// Height the container must take to fit every placed element.
    pub container_height: f32,
}

impl FlowLayout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn row_count(&self) -> usize {
        self.placements.last().map_or(0, |p| p.row + 1)
    }

    /// Placements grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Placement]> + '_ {
        self.placements.chunk_by(|a, b| a.row == b.row)
    }

    /// Rightmost edge of any placed element. Exceeds the container width
    /// when an oversized element overflowed its row.
    pub fn content_width(&self) -> f32 {
        self.placements
            .iter()
            .map(|p| p.bounds().right())
            .fold(0.0, f32::max)
    }
}
