use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Representa un lanzamiento listo para ser entregado a un socio de distribución.
///
/// Es una instantánea de solo lectura: la capa de datos la construye (ver
/// [`crate::ports::ReleaseSource`]) y el generador de notificaciones la consume
/// sin modificarla.
///
/// Los campos de texto (`title`, `artist_name`, `label_name`, ...) vienen del
/// usuario y pueden contener cualquier carácter, incluidos `<`, `&` o `"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
  /// Título del lanzamiento tal como aparece oficialmente.
  pub title: String,

  /// Artista principal del lanzamiento.
  pub artist_name: String,

  /// Sello discográfico que publica el lanzamiento.
  pub label_name: String,

  /// Género declarado por el usuario, si lo hay.
  #[serde(default)]
  pub genre: Option<String>,

  /// Fecha oficial de publicación.
  ///
  /// Si falta, se usa la fecha del día en que se genera la notificación.
  #[serde(default)]
  pub release_date: Option<NaiveDate>,

  /// Código de producto (UPC / EAN).
  #[serde(default)]
  pub upc: Option<String>,

  /// Línea de copyright (`©`). Si falta se sintetiza a partir de año y sello.
  #[serde(default)]
  pub copyright_line: Option<String>,

  /// Línea de derechos fonográficos (`℗`). Mismo criterio que `copyright_line`.
  #[serde(default)]
  pub phonographic_line: Option<String>,

  /// Artistas invitados a nivel de release, en orden de crédito.
  #[serde(default)]
  pub featured_artists: Vec<String>,

  /// Número de disco. Por defecto 1.
  #[serde(default)]
  pub disc_number: Option<NonZeroU32>,

  /// Pistas en orden. El orden es la única fuente de verdad para las referencias.
  pub tracks: Vec<TrackRecord>,
}

impl ReleaseRecord {
  /// Género efectivo: `None` si falta o está en blanco.
  pub fn genre(&self) -> Option<&str> {
    non_blank(self.genre.as_deref())
  }

  pub fn upc(&self) -> Option<&str> {
    non_blank(self.upc.as_deref())
  }

  pub fn copyright_line(&self) -> Option<&str> {
    non_blank(self.copyright_line.as_deref())
  }

  pub fn phonographic_line(&self) -> Option<&str> {
    non_blank(self.phonographic_line.as_deref())
  }

  /// Número de disco efectivo (1 si no se indicó).
  pub fn disc_number(&self) -> NonZeroU32 {
    self.disc_number.unwrap_or(NonZeroU32::MIN)
  }
}

/// Una pista concreta dentro de un [`ReleaseRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
  /// Identificador interno opaco.
  ///
  /// Solo se usa como valor de un identificador propietario con el espacio de
  /// nombres del remitente; nunca para referencias cruzadas en el documento.
  pub id: String,

  /// Título de la pista.
  pub title: String,

  /// Código ISRC, si ya fue asignado.
  #[serde(default)]
  pub isrc: Option<String>,

  /// Duración en segundos tal como la entrega la capa de datos.
  ///
  /// Un valor negativo es un dato corrupto; la validación lo rechaza antes
  /// de construir nada.
  #[serde(default)]
  pub duration_seconds: Option<i64>,

  /// Artistas invitados de esta pista, en orden de crédito.
  #[serde(default)]
  pub featured_artists: Vec<String>,
}

impl TrackRecord {
  /// ISRC efectivo: `None` si falta o está en blanco.
  pub fn isrc(&self) -> Option<&str> {
    non_blank(self.isrc.as_deref())
  }
}

/// Trata las cadenas vacías o de solo espacios como ausentes.
fn non_blank(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}
