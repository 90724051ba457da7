//! Bloque `ResourceList`: una `SoundRecording` por pista.

use gamus_core::domain::TrackRecord;

use crate::context::DeliveryContext;
use crate::format::{P_LINE_SYMBOL, format_duration, rights_line};
use crate::references::resource_ref;
use crate::xml::Element;

/// Aviso de contenido de cada grabación.
///
/// Provisional: el modelo de datos todavía no tiene un campo de contenido
/// explícito, así que toda grabación se declara como no explícita hasta que
/// ese dato exista aguas arriba.
pub const NOT_EXPLICIT: &str = "NotExplicit";

/// Género usado cuando el release no declara ninguno.
pub const UNSPECIFIED_GENRE: &str = "Unspecified";

pub const MAIN_ARTIST_ROLE: &str = "MainArtist";
pub const FEATURED_ARTIST_ROLE: &str = "FeaturedArtist";

/// Construye la `SoundRecording` de la pista `index`.
///
/// Solo se acreditan los artistas invitados de la propia pista; los del
/// release no se propagan a los recursos.
pub fn build_sound_recording(ctx: &DeliveryContext<'_>, index: usize, track: &TrackRecord) -> Element {
  let release = ctx.release;

  Element::new("SoundRecording")
    .with_child(
      Element::new("SoundRecordingId")
        .with_child(Element::leaf("ISRC", track.isrc().unwrap_or_default()))
        .with_child(proprietary_id(&ctx.config.party_id, &track.id)),
    )
    .with_child(Element::leaf("ResourceReference", resource_ref(index)))
    .with_child(reference_title(&track.title))
    .with_child(Element::leaf("Duration", format_duration(ctx.duration(index))))
    .with_child(display_artist(&release.artist_name, MAIN_ARTIST_ROLE))
    .with_children(track.featured_artists.iter().map(|name| display_artist(name, FEATURED_ARTIST_ROLE)))
    .with_child(Element::leaf("LabelName", release.label_name.as_str()))
    .with_child(p_line(ctx))
    .with_child(genre(ctx))
    .with_child(Element::leaf("ParentalWarningType", NOT_EXPLICIT))
}

/// `ResourceList` completa, en orden de pistas.
pub fn build_resource_list(ctx: &DeliveryContext<'_>) -> Element {
  Element::new("ResourceList").with_children(
    ctx.tracks().iter().enumerate().map(|(index, track)| build_sound_recording(ctx, index, track)),
  )
}

/// Identificador propietario bajo el espacio de nombres del remitente.
pub(crate) fn proprietary_id(party_id: &str, value: &str) -> Element {
  Element::leaf("ProprietaryId", value).with_attr("Namespace", party_id)
}

pub(crate) fn reference_title(title: &str) -> Element {
  Element::new("ReferenceTitle").with_child(Element::leaf("TitleText", title))
}

pub(crate) fn display_artist(name: &str, role: &'static str) -> Element {
  Element::new("DisplayArtist").with_attr("role", role).with_child(Element::leaf("PartyName", name))
}

pub(crate) fn genre(ctx: &DeliveryContext<'_>) -> Element {
  Element::new("Genre").with_child(Element::leaf("GenreText", ctx.release.genre().unwrap_or(UNSPECIFIED_GENRE)))
}

/// Línea `℗`: la del release si existe, si no `℗ {año} {sello}`.
pub(crate) fn p_line(ctx: &DeliveryContext<'_>) -> Element {
  let year = ctx.year();
  let text = rights_line(ctx.release.phonographic_line(), P_LINE_SYMBOL, year, &ctx.release.label_name);

  Element::new("PLine").with_child(Element::leaf("Year", year.to_string())).with_child(Element::leaf("PLineText", text))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{config, release, today};

  fn texts<'a>(el: &'a Element, name: &str) -> Vec<&'a str> {
    el.descendants_named(name).into_iter().filter_map(Element::text).collect()
  }

  #[test]
  fn test_sound_recording_fields() {
    let mut release = release(&[("Intro", Some(125))]);
    release.tracks[0].isrc = Some("USABC2400001".to_string());
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let sr = build_sound_recording(&ctx, 0, &release.tracks[0]);

    assert_eq!(sr.name(), "SoundRecording");
    assert_eq!(texts(&sr, "ISRC"), ["USABC2400001"]);
    let pid = sr.descendants_named("ProprietaryId")[0];
    assert_eq!(pid.attribute("Namespace"), Some("P1"));
    assert_eq!(pid.text(), Some("trk-0"));
    assert_eq!(texts(&sr, "ResourceReference"), ["A1"]);
    assert_eq!(texts(&sr, "TitleText"), ["Intro"]);
    assert_eq!(texts(&sr, "Duration"), ["PT2M5S"]);
    assert_eq!(texts(&sr, "LabelName"), ["Ava Music"]);
    assert_eq!(texts(&sr, "Year"), ["2024"]);
    assert_eq!(texts(&sr, "PLineText"), ["℗ 2024 Ava Music"]);
    assert_eq!(texts(&sr, "GenreText"), ["Electronic"]);
    assert_eq!(texts(&sr, "ParentalWarningType"), [NOT_EXPLICIT]);
  }

  #[test]
  fn test_missing_optionals_fall_back() {
    let mut release = release(&[("Drift", None)]);
    release.genre = None;
    release.phonographic_line = Some("℗ 2019 Old Owner".to_string());
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let sr = build_sound_recording(&ctx, 0, &release.tracks[0]);

    assert_eq!(sr.descendants_named("ISRC")[0].text(), Some(""));
    assert_eq!(texts(&sr, "Duration"), ["PT0M0S"]);
    assert_eq!(texts(&sr, "GenreText"), [UNSPECIFIED_GENRE]);
    assert_eq!(texts(&sr, "PLineText"), ["℗ 2019 Old Owner"]);
  }

  #[test]
  fn test_only_track_featured_artists_are_credited() {
    let mut release = release(&[("Intro", Some(1))]);
    release.featured_artists = vec!["Release Guest".to_string()];
    release.tracks[0].featured_artists = vec!["Kai".to_string(), "Mo".to_string()];
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let sr = build_sound_recording(&ctx, 0, &release.tracks[0]);
    let artists: Vec<_> = sr
      .children_named("DisplayArtist")
      .map(|a| (a.attribute("role").unwrap(), a.child("PartyName").and_then(Element::text).unwrap()))
      .collect();

    assert_eq!(artists, [(MAIN_ARTIST_ROLE, "Ava"), (FEATURED_ARTIST_ROLE, "Kai"), (FEATURED_ARTIST_ROLE, "Mo")]);
  }

  #[test]
  fn test_resource_list_follows_track_order() {
    let release = release(&[("One", Some(1)), ("Two", Some(2)), ("Three", Some(3))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let list = build_resource_list(&ctx);

    assert_eq!(list.children().len(), 3);
    assert_eq!(texts(&list, "ResourceReference"), ["A1", "A2", "A3"]);
    assert_eq!(texts(&list, "TitleText"), ["One", "Two", "Three"]);
  }
}
