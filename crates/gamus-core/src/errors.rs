// crates/gamus-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Gamus.
///
/// Las capas superiores (CLI, servicios web, etc.) deberían mapear este error
/// a mensajes de usuario o logs. Los errores de cada port llegan ya
/// convertidos a texto.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("release source error: {0}")]
  Source(String),

  #[error("generation error: {0}")]
  Generation(String),

  #[error("delivery sink error: {0}")]
  Sink(String),

  #[error("release not found: {0}")]
  NotFound(String),
}
