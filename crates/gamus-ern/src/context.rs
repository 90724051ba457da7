use chrono::NaiveDate;
use gamus_core::domain::{DeliveryConfig, ReleaseRecord, TrackRecord};

use crate::error::GenerationError;
use crate::format::resolve_year;
use crate::references::ReferenceAllocator;

/// Entrada ya validada de una generación.
///
/// Solo se puede construir con [`DeliveryContext::new`], que rechaza la
/// entrada inválida antes de que exista ningún bloque: sin pistas, identidad
/// de entrega incompleta o duraciones negativas.
#[derive(Debug, Clone)]
pub struct DeliveryContext<'a> {
  pub release: &'a ReleaseRecord,
  pub config: &'a DeliveryConfig,
  /// Fecha de lanzamiento efectiva (la del release o la de hoy).
  pub release_date: NaiveDate,
  pub refs: ReferenceAllocator,
  durations: Vec<Option<u64>>,
}

impl<'a> DeliveryContext<'a> {
  pub fn new(
    release: &'a ReleaseRecord,
    config: &'a DeliveryConfig,
    today: NaiveDate,
  ) -> Result<Self, GenerationError> {
    if let Some(field) = config.first_missing_field() {
      return Err(GenerationError::MissingDeliveryConfig { field });
    }

    if release.tracks.is_empty() {
      return Err(GenerationError::EmptyTrackList);
    }

    let durations = release
      .tracks
      .iter()
      .enumerate()
      .map(|(track, t)| match t.duration_seconds {
        None => Ok(None),
        Some(seconds) => {
          u64::try_from(seconds).map(Some).map_err(|_| GenerationError::InvalidDuration { track, seconds })
        }
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self {
      release,
      config,
      release_date: release.release_date.unwrap_or(today),
      refs: ReferenceAllocator::new(release.tracks.len()),
      durations,
    })
  }

  pub fn tracks(&self) -> &'a [TrackRecord] {
    &self.release.tracks
  }

  /// Año usado en las líneas de derechos.
  pub fn year(&self) -> i32 {
    resolve_year(self.release_date)
  }

  /// Duración validada de la pista `index`.
  pub fn duration(&self, index: usize) -> Option<u64> {
    self.durations.get(index).copied().flatten()
  }
}
