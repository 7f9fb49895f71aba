#![allow(dead_code)]

pub mod fixtures;

use tagflow::{FlowConfig, FlowLayout, FlowLayoutEngine, MonospaceMeasurer, Tag};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs one pass of `tags` through a fresh engine using the default measurer.
pub fn layout_tags(tags: &[Tag], spacing: f32, width: f32) -> FlowLayout {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut engine = FlowLayoutEngine::new(FlowConfig::default().with_spacing(spacing))
        .expect("valid spacing");
    engine
        .layout(tags, &MonospaceMeasurer::default(), width)
        .expect("lenient pass never fails")
}

/// Asserts the structural invariants every finished pass must satisfy.
pub fn assert_flow_invariants(layout: &FlowLayout, width: f32) {
    if let Some(first) = layout.placements.first() {
        assert_eq!((first.origin.x, first.origin.y), (0.0, 0.0));
    }
    for row in layout.rows() {
        let y = row[0].origin.y;
        assert_eq!(row[0].origin.x, 0.0, "rows start at the left edge");
        for p in row {
            assert_eq!(p.origin.y, y, "{} is off its row", p.id);
        }
        for p in &row[1..] {
            assert!(p.bounds().right() <= width, "{} overflows mid-row", p.id);
        }
    }
    for p in &layout.placements {
        assert!(
            p.bounds().bottom() <= layout.container_height,
            "{} sticks out of the container",
            p.id
        );
    }
}
