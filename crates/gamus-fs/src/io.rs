use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid file name: {0:?}")]
  InvalidName(String),
}

/// Escribe `contents` en `path` de forma atómica: primero a un `.tmp` hermano,
/// `fsync`, y después `rename` sobre el destino.
///
/// Un lector nunca ve el fichero a medio escribir.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = tmp_sibling(path);

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  if let Err(e) = fs::rename(&tmp_path, path) {
    let _ = fs::remove_file(&tmp_path);
    return Err(e);
  }
  Ok(())
}

/// `dir/name.ext` -> `dir/name.ext.tmp`
fn tmp_sibling(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(OsString::from).unwrap_or_default();
  name.push(".tmp");
  path.with_file_name(name)
}

/// Valida que `name` sea un nombre de fichero simple, sin directorios.
pub(crate) fn plain_file_stem(name: &str) -> Result<&str, FsError> {
  let trimmed = name.trim();
  let invalid = trimmed.is_empty()
    || trimmed == "."
    || trimmed == ".."
    || trimmed.contains(['/', '\\'])
    || trimmed.contains('\0');

  if invalid { Err(FsError::InvalidName(name.to_string())) } else { Ok(trimmed) }
}
