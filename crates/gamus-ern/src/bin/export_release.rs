//! Exporta la notificación de un release a disco.
//!
//! Uso: `export_release <releases_dir> <release_key> [output_dir]`
//!
//! Lee `<releases_dir>/<release_key>.json`, toma la identidad de entrega de
//! la sección `[delivery]` de gamus.toml y escribe `<output_dir>/<release_key>.xml`.

use std::path::PathBuf;
use std::process::ExitCode;

use gamus_core::services::DeliveryService;
use gamus_ern::{DeliverySettings, ErnGenerator};
use gamus_fs::{JsonReleaseSource, XmlFileSink};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut args = std::env::args().skip(1);
  let (Some(releases_dir), Some(release_key)) = (args.next(), args.next()) else {
    eprintln!("usage: export_release <releases_dir> <release_key> [output_dir]");
    return ExitCode::from(2);
  };
  let output_dir = args.next().map(PathBuf::from);

  match run(PathBuf::from(releases_dir), &release_key, output_dir) {
    Ok(path) => {
      info!(file = ?path, "export finished");
      ExitCode::SUCCESS
    }
    Err(e) => {
      error!("export failed: {e}");
      ExitCode::FAILURE
    }
  }
}

fn run(
  releases_dir: PathBuf,
  release_key: &str,
  output_dir: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
  let settings = DeliverySettings::load()?;
  let output_dir = match output_dir {
    Some(dir) => dir,
    None => settings.export_dir()?,
  };

  let sink = XmlFileSink::new(&output_dir);
  let target = sink.path_for(release_key)?;

  let service = DeliveryService::new(JsonReleaseSource::new(releases_dir), ErnGenerator, sink);
  let document = service.export(release_key, &settings.delivery_config())?;

  info!(message_id = %document.message_id, "release {release_key} exported");
  Ok(target)
}
