use std::fmt;

use thiserror::Error;

/// Fallos al generar una notificación de lanzamiento.
///
/// Los tres primeros se detectan antes de construir nada. Los demás indican
/// que el árbol ensamblado viola una de sus invariantes de referencias; en
/// ningún caso se devuelve un documento parcial.
#[derive(Debug, Error)]
pub enum GenerationError {
  #[error("release has no tracks")]
  EmptyTrackList,

  #[error("delivery config is missing `{field}`")]
  MissingDeliveryConfig { field: &'static str },

  #[error("track {track} has a negative duration ({seconds}s)")]
  InvalidDuration { track: usize, seconds: i64 },

  #[error("{list}: expected {expected} references, built {found}")]
  ReferenceCountMismatch { list: &'static str, expected: usize, found: usize },

  #[error("reference {reference} appears {count} times in {location}, expected exactly once")]
  DanglingReference { reference: String, location: &'static str, count: usize },

  #[error("serialize error: {0}")]
  Serialize(#[from] fmt::Error),
}
