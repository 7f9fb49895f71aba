//! Seams between the flow engine and the host that renders the elements.
//!
//! The engine never measures anything itself. A host hands it elements that
//! expose a stable identity ([`FlowItem`]) together with a measurement
//! collaborator ([`Measure`]) that reports each element's intrinsic size.

use tagflow_types::{ElementId, Size};

/// An element that can take part in a flow pass.
///
/// The id must stay stable for the whole pass and be unique within the
/// sequence.
pub trait FlowItem {
    fn id(&self) -> ElementId;
}

impl FlowItem for ElementId {
    fn id(&self) -> ElementId {
        *self
    }
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    fn id(&self) -> ElementId {
        (**self).id()
    }
}

/// Reports the intrinsic size of an element before it is placed.
///
/// Measurement must not depend on where the element ends up.
///
/// # Example
///
/// ```ignore
/// let measurer = |tag: &Tag| Size::new(tag.title.len() as f32 * 7.0, 16.0);
/// let layout = engine.layout(&tags, &measurer, 320.0)?;
/// ```
pub trait Measure<T: ?Sized> {
    fn measure(&self, item: &T) -> Size;
}

impl<T: ?Sized, F> Measure<T> for F
where
    F: Fn(&T) -> Size,
{
    fn measure(&self, item: &T) -> Size {
        self(item)
    }
}
