use std::fs;
use std::path::PathBuf;

use gamus_core::domain::ReleaseNotification;
use gamus_core::ports::{DocumentSink, SinkError};
use tracing::info;

use crate::io::{FsError, atomic_write_str, plain_file_stem};

/// `DocumentSink` que guarda cada notificación como `<dir>/<nombre>.xml`.
///
/// Si el fichero ya existe se reemplaza de forma atómica.
#[derive(Debug, Clone)]
pub struct XmlFileSink {
  dir: PathBuf,
}

impl XmlFileSink {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn path_for(&self, name: &str) -> Result<PathBuf, FsError> {
    let stem = plain_file_stem(name)?;
    Ok(self.dir.join(format!("{stem}.xml")))
  }
}

impl DocumentSink for XmlFileSink {
  fn deliver(&self, name: &str, document: &ReleaseNotification) -> Result<(), SinkError> {
    let path = self.path_for(name).map_err(|e| SinkError::Rejected(e.to_string()))?;

    fs::create_dir_all(&self.dir).map_err(|e| SinkError::Io(e.to_string()))?;
    atomic_write_str(&path, document.as_str()).map_err(|e| SinkError::Io(format!("{}: {e}", path.display())))?;

    info!(file = ?path, message_id = %document.message_id, "release notification written");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use gamus_core::domain::MessageId;
  use tempfile::tempdir;

  fn doc(xml: &str) -> ReleaseNotification {
    ReleaseNotification { message_id: MessageId::new(), xml: xml.to_string() }
  }

  #[test]
  fn test_writes_named_xml_file() {
    let tmp = tempdir().unwrap();
    let sink = XmlFileSink::new(tmp.path().join("exports"));

    sink.deliver("neon", &doc("<Message/>")).unwrap();

    let written = fs::read_to_string(tmp.path().join("exports").join("neon.xml")).unwrap();
    assert_eq!(written, "<Message/>");
  }

  #[test]
  fn test_rejects_names_with_directories() {
    let tmp = tempdir().unwrap();
    let sink = XmlFileSink::new(tmp.path());

    let err = sink.deliver("a/b", &doc("<Message/>")).unwrap_err();
    assert!(matches!(err, SinkError::Rejected(_)));
  }
}
