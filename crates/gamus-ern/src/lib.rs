//! Generador de notificaciones de lanzamiento (estilo DDEX ERN).
//!
//! Transforma un [`ReleaseRecord`](gamus_core::domain::ReleaseRecord) y la
//! identidad de entrega en un único documento XML con tres listas que se
//! referencian entre sí:
//!
//! - `ResourceList`: una `SoundRecording` por pista (`A1`, `A2`, ...).
//! - `ReleaseList`: el release principal (`R0`) y un release por pista (`R1`, ...).
//! - `DealList`: un acuerdo que cubre todos los releases.
//!
//! La generación es síncrona y pura; ver [`generate`] y [`generate_with_seed`].

pub mod config;
pub mod context;
pub mod deal;
pub mod error;
pub mod format;
pub mod generator;
pub mod message;
pub mod references;
pub mod release;
pub mod resource;
pub mod validate;
pub mod xml;

#[cfg(test)]
mod test_support;

pub use config::DeliverySettings;
pub use error::GenerationError;
pub use generator::{ErnGenerator, generate, generate_with_seed};
pub use message::HeaderSeed;
