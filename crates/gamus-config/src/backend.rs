use crate::paths::{ConfigError, GamusPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

// toml_edit para escribir preservando comentarios del resto del fichero
use toml_edit::{DocumentMut, Item};

/// Acceso por secciones (`[delivery]`, `[storage]`, ...) a la configuración.
pub trait ConfigBackend {
  /// Carga una sección obligatoria; falla si el fichero o la sección no existen.
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Carga una sección o devuelve `T::default()` si el fichero o la sección no existen.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  config_file: PathBuf,
}

impl TomlConfigBackend {
  pub fn new(paths: &GamusPaths) -> Self {
    Self::with_file(paths.config_file())
  }

  /// Backend sobre un fichero concreto (tests, herramientas).
  pub fn with_file(config_file: impl Into<PathBuf>) -> Self {
    Self { config_file: config_file.into() }
  }

  pub fn config_file(&self) -> &Path {
    &self.config_file
  }

  /// Lee el fichero como tabla TOML; `None` si todavía no existe.
  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let content = match fs::read_to_string(&self.config_file) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let table = self
      .read_table()?
      .ok_or_else(|| ConfigError::Other(format!("config file {:?} does not exist", self.config_file)))?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", self.config_file)))?;

    decode_section(section, value)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(table) = self.read_table()? else {
      debug!(file = ?self.config_file, "config file not found, using defaults for [{section}]");
      return Ok(T::default());
    };

    let Some(value) = table.get(section) else {
      debug!(file = ?self.config_file, "section [{section}] not found, using defaults");
      return Ok(T::default());
    };

    decode_section(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = &self.config_file;

    // 1) Documento actual, o uno vacío si el fichero no existe.
    let mut doc: DocumentMut = match fs::read_to_string(path) {
      Ok(content) => content.parse::<DocumentMut>()?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa con `toml` (serde) y se vuelve a parsear como
    //    tabla de toml_edit: "foo = 1\nbar = 2\n" sin cabecera.
    let section_doc = toml::to_string(value)?.parse::<DocumentMut>()?;

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    // 4) Escritura atómica.
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    gamus_fs::atomic_write_str(path, &doc.to_string())?;

    debug!(file = ?path, "saved section [{section}]");
    Ok(())
  }
}
