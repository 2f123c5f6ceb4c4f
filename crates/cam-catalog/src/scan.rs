// Directory scanning front-end for the catalog builder

use std::fs;
use std::path::Path;

use cam_types::AppResult;
use tracing::info;

use crate::builder::build;
use crate::types::JerseyRecord;

/// Build the catalog from the jersey and ball asset directories.
///
/// Directory read failures are fatal (the catalog is the whole product);
/// individual non-conforming filenames are merely skipped by the builder.
/// Filenames are sorted before building so the tie order does not depend
/// on filesystem enumeration order.
pub fn scan(jerseys_dir: &Path, balls_dir: &Path) -> AppResult<Vec<JerseyRecord>> {
    let jerseys = list_filenames(jerseys_dir)?;
    let balls = list_filenames(balls_dir)?;

    let catalog = build(&jerseys, &balls);
    info!(
        jerseys = catalog.len(),
        skipped = jerseys.len() - catalog.len(),
        "catalog built"
    );
    Ok(catalog)
}

fn list_filenames(dir: &Path) -> AppResult<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}
