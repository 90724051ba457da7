//! Bloque `DealList`: un único acuerdo comercial para todos los releases.

use crate::context::DeliveryContext;
use crate::format::format_date;
use crate::xml::Element;

pub const SUBSCRIPTION_MODEL: &str = "SubscriptionModel";
pub const AD_SUPPORTED_MODEL: &str = "AdvertisementSupportedModel";
pub const ON_DEMAND_STREAM: &str = "OnDemandStream";
pub const WORLDWIDE: &str = "Worldwide";

/// `ReleaseDeal` que cubre `R0` y cada release de pista en orden.
///
/// Los términos son fijos (suscripción + publicidad, streaming bajo demanda,
/// todo el mundo); solo la fecha de inicio depende del release.
pub fn build_release_deal(ctx: &DeliveryContext<'_>) -> Element {
  let terms = Element::new("DealTerms")
    .with_child(Element::leaf("CommercialModelType", SUBSCRIPTION_MODEL))
    .with_child(Element::leaf("CommercialModelType", AD_SUPPORTED_MODEL))
    .with_child(Element::new("Usage").with_child(Element::leaf("UseType", ON_DEMAND_STREAM)))
    .with_child(Element::leaf("TerritoryCode", WORLDWIDE))
    .with_child(Element::new("ValidityPeriod").with_child(Element::leaf("StartDate", format_date(ctx.release_date))));

  Element::new("ReleaseDeal")
    .with_children(ctx.refs.all_release_refs().map(|r| Element::leaf("DealReleaseReference", r)))
    .with_child(Element::new("Deal").with_child(terms))
}

pub fn build_deal_list(ctx: &DeliveryContext<'_>) -> Element {
  Element::new("DealList").with_child(build_release_deal(ctx))
}
