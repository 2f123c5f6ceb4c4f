//! Server state management

use std::sync::Arc;

use cam_catalog::JerseyRecord;
use cam_gemini::{GenerateOptions, Generator};

/// Server state shared across all handlers
///
/// The catalog is built once at startup and immutable thereafter; the
/// generator is absent when no API key is configured, in which case the
/// catalog endpoints still work.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<JerseyRecord>>,
    pub generator: Option<Arc<Generator>>,
    pub options: Arc<GenerateOptions>,
}

impl AppState {
    pub fn new(
        catalog: Vec<JerseyRecord>,
        generator: Option<Arc<Generator>>,
        options: GenerateOptions,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            generator,
            options: Arc::new(options),
        }
    }

    /// Look up a jersey by its unique name (the selection key).
    pub fn find_jersey(&self, name: &str) -> Option<&JerseyRecord> {
        self.catalog.iter().find(|j| j.name == name)
    }
}
