use crate::domain::ReleaseNotification;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
  #[error("io error: {0}")]
  Io(String),

  #[error("document rejected: {0}")]
  Rejected(String),
}

/// Destino final del documento generado (almacenamiento, descarga, etc.).
///
/// `name` lo elige quien llama; el sink decide extensión y ubicación.
pub trait DocumentSink {
  fn deliver(&self, name: &str, document: &ReleaseNotification) -> Result<(), SinkError>;
}
