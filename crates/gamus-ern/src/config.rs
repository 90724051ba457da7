use std::path::PathBuf;

use gamus_config::{ConfigBackend, ConfigError, GamusPaths, config_backend, paths};
use gamus_core::domain::DeliveryConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sección `[delivery]` de `gamus.toml`.
///
/// ```toml
/// [delivery]
/// party_id = "PADPIDA2024000001"
/// party_name = "Ava Music"
/// destination_name = "StreamCo"
/// export_dir = "/srv/gamus/exports"   # opcional
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySettings {
  #[serde(default)]
  pub party_id: String,
  #[serde(default)]
  pub party_name: String,
  #[serde(default)]
  pub destination_name: String,
  /// Directorio de exportación; por defecto `<data_dir>/exports`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub export_dir: Option<PathBuf>,
}

impl DeliverySettings {
  pub const SECTION: &'static str = "delivery";

  /// Carga desde la sección `[delivery]` de gamus.toml usando el backend global.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let settings: Self = backend.load_section_with_default(Self::SECTION)?;

    if settings.delivery_config().first_missing_field().is_some() {
      warn!("[delivery] section is incomplete; generation will be refused until it is filled in");
    }
    Ok(settings)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(config_backend()?)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(Self::SECTION, self)
  }

  /// Identidad de entrega que consume el generador.
  pub fn delivery_config(&self) -> DeliveryConfig {
    DeliveryConfig::new(self.party_id.trim(), self.party_name.trim(), self.destination_name.trim())
  }

  /// Directorio de exportación efectivo.
  pub fn export_dir(&self) -> Result<PathBuf, ConfigError> {
    match &self.export_dir {
      Some(dir) => Ok(dir.clone()),
      None => Ok(Self::default_export_dir(paths()?)),
    }
  }

  pub fn default_export_dir(paths: &GamusPaths) -> PathBuf {
    paths.export_dir.clone()
  }
}
