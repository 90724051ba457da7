use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use gamus_core::domain::ReleaseRecord;
use gamus_core::ports::{ReleaseSource, SourceError};
use tracing::debug;

use crate::io::plain_file_stem;

/// `ReleaseSource` sobre un directorio de ficheros `<clave>.json`.
///
/// Cada fichero contiene un [`ReleaseRecord`] serializado (ver sus campos
/// para el formato). La clave debe ser un nombre de fichero simple.
#[derive(Debug, Clone)]
pub struct JsonReleaseSource {
  root: PathBuf,
}

impl JsonReleaseSource {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn path_for(&self, key: &str) -> Result<PathBuf, SourceError> {
    let stem = plain_file_stem(key).map_err(|_| SourceError::NotFound(key.to_string()))?;
    Ok(self.root.join(format!("{stem}.json")))
  }
}

impl ReleaseSource for JsonReleaseSource {
  fn load_release(&self, key: &str) -> Result<ReleaseRecord, SourceError> {
    let path = self.path_for(key)?;

    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Err(SourceError::NotFound(key.to_string())),
      Err(e) => return Err(SourceError::Io(format!("{}: {e}", path.display()))),
    };

    let release: ReleaseRecord =
      serde_json::from_str(&content).map_err(|e| SourceError::Corrupt(format!("{}: {e}", path.display())))?;

    debug!(file = ?path, tracks = release.tracks.len(), "loaded release");
    Ok(release)
  }
}
