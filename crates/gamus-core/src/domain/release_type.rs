use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de lanzamiento tal como se declara en la notificación.
///
/// El release principal es `Single` o `Album` según su número de pistas;
/// cada pista publicada como unidad direccionable propia es un `TrackRelease`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseType {
  /// Un álbum completo (dos o más pistas).
  Album,
  /// Un lanzamiento de una sola pista.
  Single,
  /// Una pista individual dentro de un release mayor.
  TrackRelease,
}

impl ReleaseType {
  /// Tipo del release principal en función del número de pistas.
  ///
  /// Exactamente una pista es un `Single`; cualquier otro número, `Album`.
  pub fn for_track_count(track_count: usize) -> Self {
    if track_count == 1 { ReleaseType::Single } else { ReleaseType::Album }
  }
}

impl fmt::Display for ReleaseType {
  /// Nombre tal como aparece en el elemento `ReleaseType`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseType::Album => write!(f, "Album"),
      ReleaseType::Single => write!(f, "Single"),
      ReleaseType::TrackRelease => write!(f, "TrackRelease"),
    }
  }
}
