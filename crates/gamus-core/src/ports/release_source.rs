use crate::domain::ReleaseRecord;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("release not found: {0}")]
  NotFound(String),

  #[error("io error: {0}")]
  Io(String),

  #[error("corrupt release data: {0}")]
  Corrupt(String),
}

/// Port de la capa de datos que entrega un release con sus pistas ordenadas.
///
/// `key` es la clave con la que la aplicación identifica el release; su
/// formato lo decide el adapter (un id de base de datos, un nombre de fichero…).
pub trait ReleaseSource {
  fn load_release(&self, key: &str) -> Result<ReleaseRecord, SourceError>;
}
