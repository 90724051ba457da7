use crate::domain::{DeliveryConfig, ReleaseNotification};
use crate::errors::CoreError;
use crate::ports::{DocumentSink, NotificationGenerator, ReleaseSource, SourceError};

pub struct DeliveryService<S, G, K>
where
  S: ReleaseSource,
  G: NotificationGenerator,
  K: DocumentSink,
{
  source: S,
  generator: G,
  sink: K,
}

impl<S, G, K> DeliveryService<S, G, K>
where
  S: ReleaseSource,
  G: NotificationGenerator,
  K: DocumentSink,
{
  pub fn new(source: S, generator: G, sink: K) -> Self {
    Self { source, generator, sink }
  }

  /// Exporta un release completo:
  /// - carga el release y sus pistas
  /// - genera la notificación
  /// - entrega el documento al sink con `release_key` como nombre
  pub fn export(&self, release_key: &str, config: &DeliveryConfig) -> Result<ReleaseNotification, CoreError> {
    let document = self.preview(release_key, config)?;

    self.sink.deliver(release_key, &document).map_err(|e| CoreError::Sink(e.to_string()))?;

    Ok(document)
  }

  /// Igual que [`Self::export`] pero sin entregar el documento.
  pub fn preview(&self, release_key: &str, config: &DeliveryConfig) -> Result<ReleaseNotification, CoreError> {
    let release = self.source.load_release(release_key).map_err(|e| match e {
      SourceError::NotFound(key) => CoreError::NotFound(key),
      other => CoreError::Source(other.to_string()),
    })?;

    self.generator.generate(&release, config).map_err(|e| CoreError::Generation(e.to_string()))
  }
}
