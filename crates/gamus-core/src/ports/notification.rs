use crate::domain::{DeliveryConfig, ReleaseNotification, ReleaseRecord};

/// Port que abstrae la generación del documento de notificación.
///
/// La implementación debe ser una transformación pura: misma entrada, mismas
/// referencias, sin efectos secundarios.
pub trait NotificationGenerator {
  type Error: std::error::Error;

  fn generate(&self, release: &ReleaseRecord, config: &DeliveryConfig) -> Result<ReleaseNotification, Self::Error>;
}
