//! Comprobación de referencias cruzadas del árbol ensamblado.
//!
//! Cada `A{n}` debe aparecer exactamente una vez en la `ResourceList`, en la
//! lista de referencias del release principal y en su grupo de recursos. Cada
//! `R{n}` (incluido `R0`) exactamente una vez como `ReleaseReference` y una
//! vez en el acuerdo.

use crate::error::GenerationError;
use crate::references::ReferenceAllocator;
use crate::xml::Element;

pub fn check_references(
  refs: &ReferenceAllocator,
  resources: &Element,
  releases: &Element,
  deals: &Element,
) -> Result<(), GenerationError> {
  let main = releases.children_named("Release").find(|r| r.attribute("is_main") == Some("true"));

  let resource_list = texts(resources.descendants_named("ResourceReference"));
  let main_list = texts(
    main
      .and_then(|m| m.child("ReleaseResourceReferenceList"))
      .map(|l| l.children_named("ReleaseResourceReference").collect::<Vec<_>>())
      .unwrap_or_default(),
  );
  let resource_group = texts(
    main
      .and_then(|m| m.child("ResourceGroup"))
      .map(|g| {
        g.children_named("ResourceGroupContentItem")
          .filter_map(|item| item.child("ReleaseResourceReference"))
          .collect::<Vec<_>>()
      })
      .unwrap_or_default(),
  );
  let release_list =
    texts(releases.children_named("Release").filter_map(|r| r.child("ReleaseReference")).collect());
  let deal_list = texts(deals.descendants_named("DealReleaseReference"));

  let expected_resources = refs.track_count();
  let expected_releases = refs.track_count() + 1;

  for (location, found, expected) in [
    ("ResourceList", &resource_list, expected_resources),
    ("ReleaseResourceReferenceList", &main_list, expected_resources),
    ("ResourceGroup", &resource_group, expected_resources),
  ] {
    for reference in refs.resource_refs() {
      expect_once(&reference, found, location)?;
    }
    if found.len() != expected {
      return Err(GenerationError::ReferenceCountMismatch { list: location, expected, found: found.len() });
    }
  }

  for (location, found) in [("ReleaseList", &release_list), ("DealList", &deal_list)] {
    for reference in refs.all_release_refs() {
      expect_once(&reference, found, location)?;
    }
    if found.len() != expected_releases {
      return Err(GenerationError::ReferenceCountMismatch {
        list: location,
        expected: expected_releases,
        found: found.len(),
      });
    }
  }

  Ok(())
}

fn texts(elements: Vec<&Element>) -> Vec<&str> {
  elements.into_iter().filter_map(Element::text).collect()
}

fn expect_once(reference: &str, found: &[&str], location: &'static str) -> Result<(), GenerationError> {
  let count = found.iter().filter(|r| **r == reference).count();
  if count == 1 {
    Ok(())
  } else {
    Err(GenerationError::DanglingReference { reference: reference.to_string(), location, count })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::context::DeliveryContext;
  use crate::deal::build_deal_list;
  use crate::release::build_release_list;
  use crate::resource::build_resource_list;
  use crate::test_support::{config, release, today};

  #[test]
  fn test_built_blocks_pass() {
    let release = release(&[("Intro", Some(1)), ("Drift", Some(2)), ("Outro", None)]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let result = check_references(
      &ctx.refs,
      &build_resource_list(&ctx),
      &build_release_list(&ctx).unwrap(),
      &build_deal_list(&ctx),
    );
    assert!(result.is_ok());
  }

  #[test]
  fn test_missing_deal_reference_is_reported() {
    let release = release(&[("Intro", Some(1)), ("Drift", Some(2))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let deals = Element::new("DealList").with_child(
      Element::new("ReleaseDeal")
        .with_child(Element::leaf("DealReleaseReference", "R0"))
        .with_child(Element::leaf("DealReleaseReference", "R1")),
    );

    let err =
      check_references(&ctx.refs, &build_resource_list(&ctx), &build_release_list(&ctx).unwrap(), &deals).unwrap_err();
    assert!(matches!(
      err,
      GenerationError::DanglingReference { ref reference, location: "DealList", count: 0 } if reference == "R2"
    ));
  }

  #[test]
  fn test_duplicated_resource_is_reported() {
    let release = release(&[("Intro", Some(1))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let resources = build_resource_list(&ctx).with_child(
      Element::new("SoundRecording").with_child(Element::leaf("ResourceReference", "A1")),
    );

    let err =
      check_references(&ctx.refs, &resources, &build_release_list(&ctx).unwrap(), &build_deal_list(&ctx)).unwrap_err();
    assert!(matches!(err, GenerationError::DanglingReference { location: "ResourceList", count: 2, .. }));
  }

  #[test]
  fn test_stray_reference_is_reported() {
    let release = release(&[("Intro", Some(1))]);
    let config = config();
    let ctx = DeliveryContext::new(&release, &config, today()).unwrap();

    let deals = build_deal_list(&ctx).with_child(Element::leaf("DealReleaseReference", "R9"));

    let err = check_references(&ctx.refs, &build_resource_list(&ctx), &build_release_list(&ctx).unwrap(), &deals)
      .unwrap_err();
    assert!(matches!(
      err,
      GenerationError::ReferenceCountMismatch { list: "DealList", expected: 2, found: 3 }
    ));
  }
}
