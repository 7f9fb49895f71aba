use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in container space (top-left origin, y grows down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle reaches past `width` on the x axis.
    pub fn overflows_width(&self, width: f32) -> bool {
        self.right() > width
    }
}

/// Intrinsic size of an element as reported by the measurement collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Absolute top-left coordinate inside the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Offset handed back to the rendering host.
///
/// Whether this is an absolute coordinate or a delta from the natural flow
/// position depends on the convention the engine was configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl From<Point> for Offset {
    fn from(p: Point) -> Self {
        Self { dx: p.x, dy: p.y }
    }
}

impl std::ops::Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Self::Output {
        Offset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Point::new(30.0, 10.0), Size::new(50.0, 20.0));
        assert_eq!(rect.right(), 80.0);
        assert_eq!(rect.bottom(), 30.0);
        assert!(!rect.overflows_width(80.0));
        assert!(rect.overflows_width(79.0));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::zero().is_valid());
        assert!(Size::new(12.5, 3.0).is_valid());
        assert!(!Size::new(-1.0, 3.0).is_valid());
        assert!(!Size::new(1.0, f32::NAN).is_valid());
        assert!(!Size::new(f32::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn test_offset_negation() {
        let offset = Offset::from(Point::new(30.0, 10.0));
        assert_eq!(-offset, Offset::new(-30.0, -10.0));
    }

    #[test]
    fn test_size_json_shape() {
        let size: Size = serde_json::from_str(r#"{"width": 40, "height": 20}"#).unwrap();
        assert_eq!(size, Size::new(40.0, 20.0));
    }
}
