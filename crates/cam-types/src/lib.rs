//! Shared types for the Camisola workspace

pub mod errors;
pub mod images;

pub use errors::{AppError, AppResult};
pub use images::EncodedImage;
