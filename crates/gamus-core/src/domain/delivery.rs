use serde::{Deserialize, Serialize};

use crate::domain::ids::MessageId;

/// Identidad de la entrega: quién envía y a qué destino.
///
/// La rellena la pantalla de configuración de destinos (externa a este
/// workspace) o la sección `[delivery]` de `gamus.toml`. Los tres campos son
/// obligatorios y no pueden estar en blanco.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
  /// Identificador de parte del remitente (p. ej. un DPID).
  pub party_id: String,
  /// Nombre legible del remitente.
  pub party_name: String,
  /// Nombre del socio de distribución destinatario.
  pub destination_name: String,
}

impl DeliveryConfig {
  pub fn new(
    party_id: impl Into<String>,
    party_name: impl Into<String>,
    destination_name: impl Into<String>,
  ) -> Self {
    Self { party_id: party_id.into(), party_name: party_name.into(), destination_name: destination_name.into() }
  }

  /// Primer campo obligatorio que falta o está en blanco, por nombre.
  pub fn first_missing_field(&self) -> Option<&'static str> {
    [("party_id", &self.party_id), ("party_name", &self.party_name), ("destination_name", &self.destination_name)]
      .into_iter()
      .find(|(_, value)| value.trim().is_empty())
      .map(|(name, _)| name)
  }
}

/// Documento de notificación ya serializado.
///
/// Es el único producto del generador: el texto XML completo y el
/// identificador de mensaje que lleva en su cabecera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotification {
  pub message_id: MessageId,
  pub xml: String,
}

impl ReleaseNotification {
  pub fn as_str(&self) -> &str {
    &self.xml
  }

  pub fn into_string(self) -> String {
    self.xml
  }
}
