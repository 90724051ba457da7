use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador opaco de un mensaje de notificación de lanzamiento.
///
/// Se genera con UUID v4 para cada mensaje emitido; dos notificaciones del
/// mismo release nunca comparten `MessageId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    MessageId(Uuid::new_v4())
  }

  /// Construye un `MessageId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    MessageId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for MessageId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for MessageId {
  fn from(u: Uuid) -> Self {
    MessageId(u)
  }
}

impl From<MessageId> for Uuid {
  fn from(id: MessageId) -> Self {
    id.0
  }
}

impl fmt::Display for MessageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_message_ids_are_unique() {
    assert_ne!(MessageId::new(), MessageId::new());
  }

  #[test]
  fn test_display_matches_uuid() {
    let u = Uuid::nil();
    assert_eq!(MessageId::from_uuid(u).to_string(), "00000000-0000-0000-0000-000000000000");
    assert_eq!(Uuid::from(MessageId::from(u)), u);
  }
}
