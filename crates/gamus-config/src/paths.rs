use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("toml encode error: {0}")]
  TomlEncode(#[from] toml::ser::Error),
  #[error("toml edit error: {0}")]
  TomlEdit(#[from] toml_edit::TomlError),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct GamusPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  /// Destino por defecto de los documentos exportados.
  pub export_dir: PathBuf,
}

impl GamusPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var("GAMUS_BASE_DIR") {
      return Self::from_base(Path::new(&env_base));
    }

    let proj_dirs = ProjectDirs::from("com", "gamus", "gamus").ok_or(ConfigError::Directories)?;
    let data_dir = proj_dirs.data_dir().to_path_buf();

    Self::create(Self {
      base_dir: proj_dirs.config_dir().to_path_buf(),
      config_dir: proj_dirs.config_dir().to_path_buf(),
      export_dir: data_dir.join("exports"),
      data_dir,
    })
  }

  /// Layout portable bajo `base`: `config/`, `data/` y `data/exports/`.
  pub fn from_base(base: &Path) -> Result<Self, ConfigError> {
    let data_dir = base.join("data");

    Self::create(Self {
      base_dir: base.to_path_buf(),
      config_dir: base.join("config"),
      export_dir: data_dir.join("exports"),
      data_dir,
    })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("gamus.toml")
  }

  fn create(paths: Self) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&paths.config_dir)?;
    std::fs::create_dir_all(&paths.data_dir)?;
    std::fs::create_dir_all(&paths.export_dir)?;
    Ok(paths)
  }
}
