//! Gemini-backed image composition
//!
//! The pipeline takes a user photo and a selected jersey record, resolves
//! every referenced asset to raw bytes, assembles the ordered part list,
//! and submits it to the Gemini `generateContent` endpoint under a
//! timeout. Mandatory assets (subject photo, jersey image) abort the call
//! on failure; the stadium background and the era ball are best-effort.

mod assets;
mod client;
mod pipeline;
mod prompt;
pub mod wire;

pub use assets::AssetStore;
pub use client::{GeminiClient, GenerateImage, DEFAULT_MODEL};
pub use pipeline::{GenerateOptions, Generator, Phase, DEFAULT_BACKGROUND, DEFAULT_TIMEOUT_MS};
pub use prompt::build_prompt;
