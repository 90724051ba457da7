use gamus_core::domain::{DeliveryConfig, ReleaseNotification, ReleaseRecord};
use gamus_core::ports::NotificationGenerator;
use tracing::{debug, info};

use crate::context::DeliveryContext;
use crate::error::GenerationError;
use crate::message::{HeaderSeed, assemble};
use crate::xml::write_document;

/// Genera la notificación de un release para un destino.
///
/// Usa un id de mensaje nuevo y la hora actual; el resto del documento
/// depende solo de la entrada.
pub fn generate(release: &ReleaseRecord, config: &DeliveryConfig) -> Result<ReleaseNotification, GenerationError> {
  generate_with_seed(release, config, HeaderSeed::fresh())
}

/// Igual que [`generate`] con la cabecera fijada por quien llama.
///
/// Si falta la fecha de lanzamiento se usa la fecha de `seed.created_at`.
pub fn generate_with_seed(
  release: &ReleaseRecord,
  config: &DeliveryConfig,
  seed: HeaderSeed,
) -> Result<ReleaseNotification, GenerationError> {
  let ctx = DeliveryContext::new(release, config, seed.created_at.date_naive())?;

  debug!(
    message_id = %seed.message_id,
    tracks = ctx.tracks().len(),
    destination = %config.destination_name,
    "building release notification"
  );

  let message = assemble(&ctx, &seed)?;
  let xml = write_document(&message)?;

  info!(message_id = %seed.message_id, title = %release.title, bytes = xml.len(), "release notification generated");

  Ok(ReleaseNotification { message_id: seed.message_id, xml })
}

/// Adapter del port [`NotificationGenerator`] para el `DeliveryService`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErnGenerator;

impl NotificationGenerator for ErnGenerator {
  type Error = GenerationError;

  fn generate(&self, release: &ReleaseRecord, config: &DeliveryConfig) -> Result<ReleaseNotification, GenerationError> {
    generate(release, config)
  }
}
