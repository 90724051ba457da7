//! Bloque `ReleaseList`: el release principal y un release por pista.

use gamus_core::domain::{ReleaseType, TrackRecord};

use crate::context::DeliveryContext;
use crate::error::GenerationError;
use crate::format::{C_LINE_SYMBOL, format_date, rights_line};
use crate::references::{MAIN_RELEASE_REF, resource_ref, track_release_ref};
use crate::resource::{
  FEATURED_ARTIST_ROLE, MAIN_ARTIST_ROLE, display_artist, genre, p_line, proprietary_id, reference_title,
};
use crate::xml::Element;

/// Tipo de recurso de cada pista dentro del release principal.
pub const PRIMARY_RESOURCE: &str = "PrimaryResource";

/// Tipo de cada elemento del grupo de recursos.
pub const SOUND_RECORDING: &str = "SoundRecording";

/// Construye el release principal (`R0`) con todas las pistas.
///
/// Comprueba que la lista de referencias y el grupo de recursos tengan una
/// entrada por pista.
pub fn build_main_release(ctx: &DeliveryContext<'_>) -> Result<Element, GenerationError> {
  let release = ctx.release;
  let track_count = ctx.tracks().len();

  let resource_refs: Vec<Element> = ctx.refs.resource_refs().map(primary_resource_ref).collect();
  check_count("ReleaseResourceReferenceList", track_count, resource_refs.len())?;

  let content_items: Vec<Element> =
    ctx.refs.resource_refs().enumerate().map(|(index, r)| resource_group_item(index, r)).collect();
  check_count("ResourceGroup", track_count, content_items.len())?;

  let release_id = Element::new("ReleaseId").with_optional_child(release.upc().map(|upc| Element::leaf("ICPN", upc)));

  let c_line_text = rights_line(release.copyright_line(), C_LINE_SYMBOL, ctx.year(), &release.label_name);

  Ok(
    Element::new("Release")
      .with_attr("is_main", "true")
      .with_child(release_id)
      .with_child(Element::leaf("ReleaseReference", MAIN_RELEASE_REF))
      .with_child(reference_title(&release.title))
      .with_child(display_artist(&release.artist_name, MAIN_ARTIST_ROLE))
      .with_children(release.featured_artists.iter().map(|name| display_artist(name, FEATURED_ARTIST_ROLE)))
      .with_child(Element::leaf("LabelName", release.label_name.as_str()))
      .with_child(Element::new("ReleaseResourceReferenceList").with_children(resource_refs))
      .with_child(Element::leaf("ReleaseType", ReleaseType::for_track_count(track_count).to_string()))
      .with_child(
        Element::new("ResourceGroup")
          .with_child(Element::leaf("SequenceNumber", release.disc_number().to_string()))
          .with_children(content_items),
      )
      .with_child(genre(ctx))
      .with_child(Element::leaf("ReleaseDate", format_date(ctx.release_date)))
      .with_child(p_line(ctx))
      .with_child(
        Element::new("CLine")
          .with_child(Element::leaf("Year", ctx.year().to_string()))
          .with_child(Element::leaf("CLineText", c_line_text)),
      ),
  )
}

/// Release individual (`R{index + 1}`) de una pista.
///
/// El artista es el del release: las pistas no tienen artista propio.
pub fn build_track_release(ctx: &DeliveryContext<'_>, index: usize, track: &TrackRecord) -> Element {
  let release_id = Element::new("ReleaseId")
    .with_optional_child(track.isrc().map(|isrc| Element::leaf("ISRC", isrc)))
    .with_child(proprietary_id(&ctx.config.party_id, &track.id));

  Element::new("Release")
    .with_attr("is_main", "false")
    .with_child(release_id)
    .with_child(Element::leaf("ReleaseReference", track_release_ref(index)))
    .with_child(reference_title(&track.title))
    .with_child(display_artist(&ctx.release.artist_name, MAIN_ARTIST_ROLE))
    .with_child(Element::new("ReleaseResourceReferenceList").with_child(primary_resource_ref(resource_ref(index))))
    .with_child(Element::leaf("ReleaseType", ReleaseType::TrackRelease.to_string()))
    .with_child(p_line(ctx))
}

/// `ReleaseList` completa: principal primero, después una por pista en orden.
pub fn build_release_list(ctx: &DeliveryContext<'_>) -> Result<Element, GenerationError> {
  let main = build_main_release(ctx)?;

  let track_releases: Vec<Element> =
    ctx.tracks().iter().enumerate().map(|(index, track)| build_track_release(ctx, index, track)).collect();
  check_count("ReleaseList", ctx.tracks().len(), track_releases.len())?;

  Ok(Element::new("ReleaseList").with_child(main).with_children(track_releases))
}

fn primary_resource_ref(reference: String) -> Element {
  Element::leaf("ReleaseResourceReference", reference).with_attr("ReleaseResourceType", PRIMARY_RESOURCE)
}

/// Elemento `index` (base 0) del grupo de recursos; la secuencia empieza en 1.
fn resource_group_item(index: usize, reference: String) -> Element {
  Element::new("ResourceGroupContentItem")
    .with_child(Element::leaf("SequenceNumber", (index + 1).to_string()))
    .with_child(Element::leaf("ResourceType", SOUND_RECORDING))
    .with_child(Element::leaf("ReleaseResourceReference", reference))
}

fn check_count(list: &'static str, expected: usize, found: usize) -> Result<(), GenerationError> {
  if expected == found {
    Ok(())
  } else {
    Err(GenerationError::ReferenceCountMismatch { list, expected, found })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{config, release, today};

  fn texts<'a>(el: &'a Element, name: &str) -> Vec<&'a str> {
    el.descendants_named(name).into_iter().filter_map(Element::text).collect()
  }

  #[test]
  fn test_main_release_for_album() {
    let mut release = release(&[("Intro", Some(125)), ("Drift", Some(0))]);
    release.upc = Some("0123456789012".to_string());
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let main = build_main_release(&ctx).unwrap();

    assert_eq!(main.attribute("is_main"), Some("true"));
    assert_eq!(texts(&main, "ICPN"), ["0123456789012"]);
    assert_eq!(texts(&main, "ReleaseReference"), ["R0"]);
    assert_eq!(texts(&main, "ReleaseType"), ["Album"]);
    assert_eq!(texts(&main, "ReleaseDate"), ["2024-03-01"]);
    assert_eq!(texts(&main, "CLineText"), ["© 2024 Ava Music"]);

    let list = main.child("ReleaseResourceReferenceList").unwrap();
    let refs: Vec<_> = list.children().iter().filter_map(Element::text).collect();
    assert_eq!(refs, ["A1", "A2"]);
    assert!(list.children().iter().all(|r| r.attribute("ReleaseResourceType") == Some(PRIMARY_RESOURCE)));
  }

  #[test]
  fn test_resource_group_numbers_tracks() {
    let mut release = release(&[("Intro", Some(1)), ("Drift", Some(2))]);
    release.disc_number = std::num::NonZeroU32::new(2);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let main = build_main_release(&ctx).unwrap();
    let group = main.child("ResourceGroup").unwrap();

    assert_eq!(group.child("SequenceNumber").and_then(Element::text), Some("2"));
    let items: Vec<_> = group
      .children_named("ResourceGroupContentItem")
      .map(|item| {
        (
          item.child("SequenceNumber").and_then(Element::text).unwrap(),
          item.child("ResourceType").and_then(Element::text).unwrap(),
          item.child("ReleaseResourceReference").and_then(Element::text).unwrap(),
        )
      })
      .collect();
    assert_eq!(items, [("1", SOUND_RECORDING, "A1"), ("2", SOUND_RECORDING, "A2")]);
  }

  #[test]
  fn test_single_track_is_single() {
    let release = release(&[("Only", Some(200))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let main = build_main_release(&ctx).unwrap();
    assert_eq!(texts(&main, "ReleaseType"), ["Single"]);
    assert!(main.descendants_named("ICPN").is_empty());
  }

  #[test]
  fn test_main_release_credits_release_featured_artists() {
    let mut release = release(&[("Only", Some(200))]);
    release.featured_artists = vec!["Guest".to_string()];
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let main = build_main_release(&ctx).unwrap();
    let roles: Vec<_> = main.children_named("DisplayArtist").filter_map(|a| a.attribute("role")).collect();
    assert_eq!(roles, [MAIN_ARTIST_ROLE, FEATURED_ARTIST_ROLE]);
  }

  #[test]
  fn test_track_release() {
    let mut release = release(&[("Intro", Some(1)), ("Drift", Some(2))]);
    release.tracks[1].isrc = Some("USABC2400002".to_string());
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let first = build_track_release(&ctx, 0, &release.tracks[0]);
    assert_eq!(first.attribute("is_main"), Some("false"));
    assert!(first.descendants_named("ISRC").is_empty());
    assert_eq!(texts(&first, "ProprietaryId"), ["trk-0"]);
    assert_eq!(texts(&first, "ReleaseReference"), ["R1"]);
    assert_eq!(texts(&first, "ReleaseResourceReference"), ["A1"]);
    assert_eq!(texts(&first, "PartyName"), ["Ava"]);
    assert_eq!(texts(&first, "ReleaseType"), ["TrackRelease"]);

    let second = build_track_release(&ctx, 1, &release.tracks[1]);
    assert_eq!(texts(&second, "ISRC"), ["USABC2400002"]);
    assert_eq!(texts(&second, "ReleaseReference"), ["R2"]);
    assert_eq!(texts(&second, "TitleText"), ["Drift"]);
  }

  #[test]
  fn test_release_list_puts_main_first() {
    let release = release(&[("Intro", Some(1)), ("Drift", Some(2)), ("Outro", Some(3))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let list = build_release_list(&ctx).unwrap();
    let refs: Vec<_> =
      list.children().iter().filter_map(|r| r.child("ReleaseReference").and_then(Element::text)).collect();

    assert_eq!(refs, ["R0", "R1", "R2", "R3"]);
  }

  #[test]
  fn test_count_check() {
    assert!(check_count("X", 2, 2).is_ok());
    assert!(matches!(
      check_count("X", 2, 1),
      Err(GenerationError::ReferenceCountMismatch { list: "X", expected: 2, found: 1 })
    ));
  }
}
