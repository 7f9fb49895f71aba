//! The flow layout engine.
//!
//! Elements are placed greedily, left to right, in sequence order. An element
//! that does not fit in what remains of the current row starts a new row at
//! the left edge; nothing is ever moved back once placed. The container height
//! grows to cover the bottom edge of every element placed so far, and is
//! carried from one pass to the next: a later pass never lowers it. Call
//! [`FlowLayoutEngine::reset`] when the container should be allowed to shrink.
//!
//! Two ways of driving a pass are offered:
//!
//! - [`FlowLayoutEngine::begin_pass`] returns a [`FlowPass`] that holds the
//!   engine for the duration of the pass and commits the container height in
//!   [`FlowPass::finish`].
//! - [`FlowLayoutEngine::place_next`] is the bare per-element step for hosts
//!   that drive placement from their own iteration. The pass boundary is
//!   signalled by `is_first_in_sequence`, and [`FlowLayoutEngine::end_pass`]
//!   commits the height.
//!
//! Callers must place every element of a pass exactly once and strictly in
//! sequence order. An engine serves one container; it is not meant to be
//! shared between containers.

use crate::config::FlowConfig;
use crate::cursor::CursorState;
use crate::interface::{FlowItem, Measure};
use crate::output::{FlowLayout, Placement};
use crate::LayoutError;
use std::collections::HashSet;
use tagflow_types::{ElementId, Size};

#[derive(Debug, Clone)]
pub struct FlowLayoutEngine {
    config: FlowConfig,
    cursor: CursorState,
    /// False until the first element of a pass has been placed.
    pass_open: bool,
    /// Ids placed in the current pass. Only tracked on validated paths.
    placed: HashSet<ElementId>,
    committed_height: f32,
}

impl Default for FlowLayoutEngine {
    fn default() -> Self {
        Self {
            config: FlowConfig::default(),
            cursor: CursorState::new(),
            pass_open: false,
            placed: HashSet::new(),
            committed_height: 0.0,
        }
    }
}

impl FlowLayoutEngine {
    pub fn new(config: FlowConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Running container height of the pass in progress.
    pub fn container_height(&self) -> f32 {
        self.cursor.height()
    }

    /// Forgets the cursor, the running and committed heights and any open
    /// pass, as if the engine had just been created.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.pass_open = false;
        self.placed.clear();
        self.committed_height = 0.0;
    }

    /// Height published by the last completed pass. Stays at `0.0` until a
    /// pass has been committed.
    pub fn committed_height(&self) -> f32 {
        self.committed_height
    }

    /// Places the next element of the sequence.
    ///
    /// `is_first_in_sequence` rewinds the cursor and opens a new pass. Inputs
    /// are not validated: negative sizes or a non-positive container width
    /// produce degenerate geometry (typically one element per row) but never
    /// fail.
    pub fn place_next(
        &mut self,
        id: ElementId,
        measured_size: Size,
        container_width: f32,
        is_first_in_sequence: bool,
    ) -> Placement {
        self.pass_open = true;

        let step = self.cursor.advance(
            measured_size,
            container_width,
            self.config.spacing,
            is_first_in_sequence,
        );

        if step.wrapped {
            log::debug!(
                "{} wrapped to row {} at y={:.2}",
                id,
                step.row,
                step.origin.y
            );
        }
        let placement = Placement::new(id, step.origin, measured_size, step.row, self.config.convention);
        if placement.bounds().overflows_width(container_width) {
            log::warn!(
                "{} is {:.2} wide and overflows the container width of {:.2}",
                id,
                measured_size.width,
                container_width
            );
        }
        log::trace!(
            "placed {} at ({:.2}, {:.2}), container height {:.2}",
            id,
            step.origin.x,
            step.origin.y,
            self.cursor.height()
        );

        placement
    }

    /// Validated variant of [`place_next`](Self::place_next).
    ///
    /// Rejects negative or non-finite sizes, an element placed twice in the
    /// same pass, and continuing a pass that was never opened.
    pub fn try_place_next(
        &mut self,
        id: ElementId,
        measured_size: Size,
        container_width: f32,
        is_first_in_sequence: bool,
    ) -> Result<Placement, LayoutError> {
        if !measured_size.is_valid() {
            return Err(LayoutError::NegativeSize {
                id,
                width: measured_size.width,
                height: measured_size.height,
            });
        }
        if !is_first_in_sequence && !self.pass_open {
            return Err(LayoutError::PassNotStarted(id));
        }
        if is_first_in_sequence {
            self.placed.clear();
        }
        if !self.placed.insert(id) {
            return Err(LayoutError::DuplicateElement(id));
        }
        Ok(self.place_next(id, measured_size, container_width, is_first_in_sequence))
    }

    /// Commits the running height of a pass driven through `place_next` and
    /// returns it.
    pub fn end_pass(&mut self) -> f32 {
        self.commit()
    }

    /// Starts a new pass against `container_width`.
    pub fn begin_pass(&mut self, container_width: f32) -> FlowPass<'_> {
        self.cursor.rewind();
        self.pass_open = false;
        self.placed.clear();
        log::debug!("begin flow pass, container width {:.2}", container_width);
        FlowPass {
            engine: self,
            container_width,
            placements: Vec::new(),
        }
    }

    /// Runs a whole pass over `items`, measuring each one with `measurer`.
    pub fn layout<T, M>(
        &mut self,
        items: &[T],
        measurer: &M,
        container_width: f32,
    ) -> Result<FlowLayout, LayoutError>
    where
        T: FlowItem,
        M: Measure<T> + ?Sized,
    {
        let mut pass = self.begin_pass(container_width);
        for item in items {
            pass.place(item.id(), measurer.measure(item))?;
        }
        Ok(pass.finish())
    }

    fn commit(&mut self) -> f32 {
        let height = self.cursor.height();
        self.committed_height = height;
        self.pass_open = false;
        height
    }
}

/// One in-progress pass. Holds the engine exclusively until
/// [`finish`](FlowPass::finish) commits the result; dropping it instead
/// discards the pass and leaves the previously committed height in place.
#[derive(Debug)]
pub struct FlowPass<'a> {
    engine: &'a mut FlowLayoutEngine,
    container_width: f32,
    placements: Vec<Placement>,
}

impl FlowPass<'_> {
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Places the next element. Only fails when the engine is configured as
    /// strict.
    pub fn place(&mut self, id: ElementId, measured_size: Size) -> Result<Placement, LayoutError> {
        let is_first = self.placements.is_empty();
        let placement = if self.engine.config.strict {
            self.engine
                .try_place_next(id, measured_size, self.container_width, is_first)?
        } else {
            self.engine
                .place_next(id, measured_size, self.container_width, is_first)
        };
        self.placements.push(placement);
        Ok(placement)
    }

    pub fn finish(mut self) -> FlowLayout {
        let container_height = self.engine.commit();
        log::debug!(
            "committed flow pass: {} elements, {} rows, height {:.2}",
            self.placements.len(),
            self.placements.last().map_or(0, |p| p.row + 1),
            container_height
        );
        FlowLayout {
            placements: std::mem::take(&mut self.placements),
            container_height,
        }
    }
}

impl Drop for FlowPass<'_> {
    // An abandoned pass must not be continued by `try_place_next`.
    fn drop(&mut self) {
        self.engine.pass_open = false;
        self.engine.placed.clear();
    }
}

/// Lays `items` out through a fresh engine. Replaying the same inputs always
/// yields the same layout.
pub fn layout_sequence<T, M>(
    config: FlowConfig,
    items: &[T],
    measurer: &M,
    container_width: f32,
) -> Result<FlowLayout, LayoutError>
where
    T: FlowItem,
    M: Measure<T> + ?Sized,
{
    FlowLayoutEngine::new(config)?.layout(items, measurer, container_width)
}
