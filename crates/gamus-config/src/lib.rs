mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ConfigError, GamusPaths};

use once_cell::sync::OnceCell;

static PATHS: OnceCell<GamusPaths> = OnceCell::new();
static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Paths de Gamus (portable o de sistema), detectados una sola vez.
pub fn paths() -> Result<&'static GamusPaths, ConfigError> {
  PATHS.get_or_try_init(GamusPaths::detect)
}

/// Backend de config compartido sobre `gamus.toml`.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| Ok(TomlConfigBackend::new(paths()?)))
}
