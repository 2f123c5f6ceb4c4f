// Runtime catalog types
//
// Built once at catalog-construction time and immutable thereafter.

use serde::{Deserialize, Serialize};

/// Reference to a jersey image. Exactly one form must be usable at read
/// time: either a resolvable asset path or an inline data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// Asset path relative to the assets root, e.g. `/camisolas/1994.png`.
    Path(String),
    /// Inline `data:{mime};base64,...` URL.
    Inline(String),
}

/// One selectable historical jersey.
///
/// `name` is unique within a catalog and serves as the selection key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JerseyRecord {
    pub name: String,
    pub description: String,
    pub year: i32,
    pub image: ImageRef,
    /// Path of the matched ball-era image, or `None` when no ball asset
    /// with a parseable year exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball: Option<String>,
}

/// One ball image tagged with the year parsed from its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallAsset {
    pub year: i32,
    pub path: String,
}
