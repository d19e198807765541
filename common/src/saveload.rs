use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn create_file(path: &Path) -> Option<File> {
    File::create(path)
        .map_err(|e| log::error!("could not create {}: {}", path.display(), e))
        .ok()
}

fn open_file(path: &Path) -> Option<File> {
    File::open(path)
        .map_err(|e| log::error!("could not open {}: {}", path.display(), e))
        .ok()
}

/// Reads a whole YAML document into a typed value, logging the underlying
/// error on failure.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| log::error!("could not read {}: {}", path.display(), e))
        .ok()?;
    serde_yml::from_str(&raw)
        .map_err(|e| log::error!("failed deserializing {}: {}", path.display(), e))
        .map(|x| {
            log::info!("successfully loaded {}", path.display());
            x
        })
        .ok()
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    serde_json::from_reader(BufReader::new(open_file(path)?))
        .map_err(|e| log::error!("failed deserializing {}: {}", path.display(), e))
        .map(|x| {
            log::info!("successfully loaded {}", path.display());
            x
        })
        .ok()
}

pub fn save_json<T: Serialize>(x: &T, path: &Path) -> Option<()> {
    let w = BufWriter::new(create_file(path)?);

    serde_json::to_writer_pretty(w, x)
        .map_err(|e| log::error!("failed serializing {}: {}", path.display(), e))
        .ok()?;
    log::info!("successfully saved {}", path.display());
    Some(())
}
