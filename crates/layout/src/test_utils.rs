use crate::{ElementId, FlowConfig, FlowItem, FlowLayout, FlowLayoutEngine, Size};

/// A pre-measured element for tests.
#[derive(Debug, Clone, Copy)]
pub struct TestTag {
    pub id: ElementId,
    pub size: Size,
}

impl FlowItem for TestTag {
    fn id(&self) -> ElementId {
        self.id
    }
}

pub fn measured(tag: &TestTag) -> Size {
    tag.size
}

/// Creates an engine with the given spacing and otherwise default settings.
pub fn create_test_engine(spacing: f32) -> FlowLayoutEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    FlowLayoutEngine::new(FlowConfig::default().with_spacing(spacing)).unwrap()
}

/// Tags with ids 1..=n, the given widths and a shared height.
pub fn tags_with_widths(widths: &[f32], height: f32) -> Vec<TestTag> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| TestTag {
            id: ElementId::new(i as u64 + 1),
            size: Size::new(width, height),
        })
        .collect()
}

pub fn tags_with_sizes(sizes: &[(f32, f32)]) -> Vec<TestTag> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(width, height))| TestTag {
            id: ElementId::new(i as u64 + 1),
            size: Size::new(width, height),
        })
        .collect()
}

pub fn layout_tags(engine: &mut FlowLayoutEngine, tags: &[TestTag], container_width: f32) -> FlowLayout {
    engine.layout(tags, &measured, container_width).unwrap()
}

/// Absolute (x, y) of every placement, in order.
pub fn origins(layout: &FlowLayout) -> Vec<(f32, f32)> {
    layout
        .placements
        .iter()
        .map(|p| (p.origin.x, p.origin.y))
        .collect()
}
