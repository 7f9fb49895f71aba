use serde_json::{Value, json};
use tagflow::Tag;

/// The genre cloud used in the sample tag cloud.
pub fn genre_tags() -> Vec<Tag> {
    [
        "Blues",
        "Rock",
        "Heavy Metal",
        "Alternative Country",
        "Contemporary Metal",
        "Electroacoustic",
        "British Folk Revival",
        "Electronic",
        "Indie",
        "Classic",
        "Punk",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, title)| Tag::new(i as u64 + 1, title))
    .collect()
}

/// A scene with pre-measured tags of equal height.
pub fn sized_scene(width: f32, spacing: f32, widths: &[f32], height: f32) -> Value {
    let tags: Vec<Value> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| json!({ "id": i + 1, "width": w, "height": height }))
        .collect();
    json!({ "width": width, "spacing": spacing, "tags": tags })
}

/// A scene whose tags are measured from their titles.
pub fn titled_scene(width: f32, spacing: f32, titles: &[&str]) -> Value {
    let tags: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "id": i + 1, "title": t }))
        .collect();
    json!({ "width": width, "spacing": spacing, "tags": tags })
}
