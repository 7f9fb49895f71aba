/// Robust floating point comparison for layout coordinates.
pub fn floats_fuzzy_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}

/// Helper for comparing slices of floats (e.g., the y offsets of a row).
pub fn float_slices_fuzzy_eq(a: &[f32], b: &[f32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| floats_fuzzy_eq(*x, *y))
}
