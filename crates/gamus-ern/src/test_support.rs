//! Datos de prueba compartidos por los tests unitarios del crate.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use gamus_core::domain::{DeliveryConfig, MessageId, ReleaseRecord, TrackRecord};
use uuid::Uuid;

use crate::message::HeaderSeed;

/// Release "Neon" de "Ava" con las pistas dadas como `(título, duración)`.
pub fn release(tracks: &[(&str, Option<i64>)]) -> ReleaseRecord {
  ReleaseRecord {
    title: "Neon".to_string(),
    artist_name: "Ava".to_string(),
    label_name: "Ava Music".to_string(),
    genre: Some("Electronic".to_string()),
    release_date: NaiveDate::from_ymd_opt(2024, 3, 1),
    upc: None,
    copyright_line: None,
    phonographic_line: None,
    featured_artists: vec![],
    disc_number: None,
    tracks: tracks
      .iter()
      .enumerate()
      .map(|(i, (title, duration))| TrackRecord {
        id: format!("trk-{i}"),
        title: title.to_string(),
        isrc: None,
        duration_seconds: *duration,
        featured_artists: vec![],
      })
      .collect(),
  }
}

pub fn config() -> DeliveryConfig {
  DeliveryConfig::new("P1", "Ava Music", "StreamCo")
}

pub fn created_at() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
}

pub fn today() -> NaiveDate {
  created_at().date_naive()
}

pub fn seed() -> HeaderSeed {
  HeaderSeed::new(MessageId::from_uuid(Uuid::nil()), created_at())
}
