//! Ensamblado del mensaje completo: cabecera y las tres listas.

use chrono::{DateTime, Utc};
use gamus_core::domain::MessageId;

use crate::context::DeliveryContext;
use crate::deal::build_deal_list;
use crate::error::GenerationError;
use crate::format::format_timestamp;
use crate::release::build_release_list;
use crate::resource::build_resource_list;
use crate::validate::check_references;
use crate::xml::Element;

/// Datos de cabecera que no dependen de la entrada: id de mensaje y momento
/// de creación.
///
/// Con la misma semilla y la misma entrada, el documento es idéntico byte a
/// byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSeed {
  pub message_id: MessageId,
  pub created_at: DateTime<Utc>,
}

impl HeaderSeed {
  pub fn new(message_id: MessageId, created_at: DateTime<Utc>) -> Self {
    Self { message_id, created_at }
  }

  /// Id nuevo y hora actual.
  pub fn fresh() -> Self {
    Self::new(MessageId::new(), Utc::now())
  }
}

pub fn build_header(ctx: &DeliveryContext<'_>, seed: &HeaderSeed) -> Element {
  let config = ctx.config;

  Element::new("MessageHeader")
    .with_child(Element::leaf("MessageId", seed.message_id.to_string()))
    .with_child(
      Element::new("Sender")
        .with_attr("party_id", config.party_id.as_str())
        .with_attr("party_name", config.party_name.as_str()),
    )
    .with_child(Element::new("Recipient").with_attr("name", config.destination_name.as_str()))
    .with_child(Element::leaf("CreatedDateTime", format_timestamp(seed.created_at)))
}

/// Construye el árbol `Message` y valida sus referencias cruzadas.
///
/// Si cualquier paso falla no se devuelve nada del árbol.
pub fn assemble(ctx: &DeliveryContext<'_>, seed: &HeaderSeed) -> Result<Element, GenerationError> {
  let resources = build_resource_list(ctx);
  let releases = build_release_list(ctx)?;
  let deals = build_deal_list(ctx);

  check_references(&ctx.refs, &resources, &releases, &deals)?;

  Ok(
    Element::new("Message")
      .with_child(build_header(ctx, seed))
      .with_child(resources)
      .with_child(releases)
      .with_child(deals),
  )
}
