//! Jersey catalog construction
//!
//! Scans a directory of jersey images and a directory of ball images,
//! extracts years from filenames, and pairs each jersey with the
//! temporally closest ball. The result is an ordered, immutable list of
//! [`JerseyRecord`]s built once at startup and held for the lifetime of
//! the process.

mod builder;
mod scan;
pub mod types;

pub use builder::build;
pub use scan::scan;
pub use types::{BallAsset, ImageRef, JerseyRecord};
