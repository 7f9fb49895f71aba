//! The mutable cursor carried across one flow pass.
//!
//! `CursorState` holds everything the greedy row-wrapping algorithm needs to
//! place the next element: where the next element would start on the current
//! row, where the current row starts vertically, and how tall the content is
//! so far. Each call to [`CursorState::advance`] consumes one measured size
//! and yields that element's top-left coordinate.

use tagflow_types::{Point, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    /// Horizontal offset at which the next element starts if it fits.
    pub cursor_x: f32,
    /// Top of the current row.
    pub cursor_y: f32,
    /// Running bottom edge of placed content. `None` until the first element
    /// has ever been placed, so a zero-height first element is still
    /// distinguishable from "nothing placed". Carried across passes; a later
    /// pass only grows it.
    pub container_height: Option<f32>,
    /// Zero-based index of the current row.
    pub row: usize,
}

/// Where a single `advance` step put the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub origin: Point,
    pub row: usize,
    pub wrapped: bool,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor back to the top-left corner for a new pass. The
    /// container height is kept.
    pub fn rewind(&mut self) {
        self.cursor_x = 0.0;
        self.cursor_y = 0.0;
        self.row = 0;
    }

    /// Forgets everything, including the container height.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether an element of `width` would run past `container_width` from the
    /// current cursor. Flush against the right edge still fits.
    pub fn exceeds(&self, width: f32, container_width: f32) -> bool {
        self.cursor_x + width > container_width
    }

    pub fn height(&self) -> f32 {
        self.container_height.unwrap_or(0.0)
    }

    /// Places one element and moves the cursor past it.
    ///
    /// `starts_pass` rewinds the cursor first; the element then opens row 0.
    pub fn advance(&mut self, size: Size, container_width: f32, spacing: f32, starts_pass: bool) -> Step {
        if starts_pass {
            self.rewind();
        }

        let exceeds = self.exceeds(size.width, container_width);

        // Row advance uses the height of the element that triggers the wrap.
        let wrapped = !starts_pass && exceeds;
        if wrapped {
            self.cursor_y += size.height + spacing;
            self.row += 1;
        }

        let x = if starts_pass || exceeds {
            self.cursor_x = size.width + spacing;
            0.0
        } else {
            let x = self.cursor_x;
            self.cursor_x += size.width + spacing;
            x
        };

        let bottom = self.cursor_y + size.height;
        self.container_height = Some(match self.container_height {
            Some(h) if h >= bottom => h,
            _ => bottom,
        });

        Step {
            origin: Point::new(x, self.cursor_y),
            row: self.row,
            wrapped,
        }
    }
}
