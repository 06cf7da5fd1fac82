use metrics_exporter_prometheus::PrometheusHandle;
use sermon_bench::config::{AppConfig, CatalogConfig};
use sermon_bench::error::AppError;
use sermon_bench::profiles::{CatalogError, ProfileCatalog};
use sermon_bench::submission::{SelectedFile, UploadType};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<ProfileCatalog>,
}

/// Loads the configured CSV catalog, or the built-in profiles when none is set.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<ProfileCatalog, CatalogError> {
    match &config.profiles_csv {
        Some(path) => {
            let catalog = ProfileCatalog::from_path(path)?;
            info!(path = %path.display(), profiles = catalog.len(), "loaded profile catalog");
            Ok(catalog)
        }
        None => Ok(ProfileCatalog::standard()),
    }
}

/// Catalog for the CLI commands, honoring the same configuration as the server.
pub(crate) fn configured_catalog() -> Result<ProfileCatalog, AppError> {
    let config = AppConfig::load()?;
    Ok(load_catalog(&config.catalog)?)
}

/// Parses `name=score` pairs given on the command line.
pub(crate) fn parse_metric_pair(raw: &str) -> Result<(String, i32), String> {
    let (name, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SCORE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("metric name missing in '{raw}'"));
    }
    let score = score
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("failed to parse score in '{raw}' ({err})"))?;
    Ok((name.to_string(), score))
}

/// Describes a file on disk the way the browser picker would, guessing the MIME type.
pub(crate) fn describe_file(path: &Path) -> std::io::Result<SelectedFile> {
    let size_bytes = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string());
    Ok(SelectedFile::new(name, size_bytes, mime_type))
}

/// Picks the upload mode matching a file's MIME type.
pub(crate) fn upload_type_for(file: &SelectedFile) -> UploadType {
    match file.mime_type.as_deref() {
        Some(mime) if mime.starts_with("audio/") => UploadType::Audio,
        Some(mime) if mime.starts_with("video/") => UploadType::Video,
        _ => UploadType::File,
    }
}
