use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{builtin_catalog, Catalog, CatalogResult};
use crate::contact::RequiredFields;
use crate::render::{CardLabels, LazyImageSettings};
use crate::state::Category;
use crate::storage::StorageKeys;
use crate::view::{ViewOptions, DEFAULT_LARGEST_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "temple-album";
const APP_CONFIG_FILE: &str = "config.json";
const STORAGE_FILE: &str = "storage.json";
const DEFAULT_CATALOG: &str = "gallery";

/// Gallery settings from `config.json`. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Built-in catalog name, used unless `catalog_path` is set.
    pub catalog: String,
    pub catalog_path: Option<PathBuf>,
    pub categories: Vec<Category>,
    pub sort_enabled: bool,
    pub largest_count: usize,
    pub persist_last_filter: bool,
    pub lazy_images: LazyImageSettings,
    /// Favorite toggle text on each card.
    pub card_labels: CardLabels,
    pub contact_required: RequiredFields,
    pub storage_keys: StorageKeys,
    pub storage_path: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            catalog_path: None,
            categories: Category::ALL.to_vec(),
            sort_enabled: true,
            largest_count: DEFAULT_LARGEST_COUNT,
            persist_last_filter: false,
            lazy_images: LazyImageSettings::default(),
            card_labels: CardLabels::default(),
            contact_required: RequiredFields::default(),
            storage_keys: StorageKeys::default(),
            storage_path: None,
        }
    }
}

impl GalleryConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            largest_count: self.largest_count,
            sort_enabled: self.sort_enabled,
        }
    }

    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => builtin_catalog(&self.catalog),
        }
    }

    /// Explicit `storage_path`, else the per-user data file.
    pub fn resolve_storage_path(&self) -> Result<PathBuf, ConfigPathError> {
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        let (xdg_data_home, home) = data_env_dirs();
        app_data_path(APP_DIR, STORAGE_FILE, xdg_data_home.as_deref(), home.as_deref())
    }
}

pub fn load_app_config() -> GalleryConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> GalleryConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return GalleryConfig::default(),
    };
    if !path.exists() {
        return GalleryConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            GalleryConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            GalleryConfig::default()
        }
    }
}

pub fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = xdg_root(xdg_config_home, home, ".config")?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

pub fn app_data_path(
    app_dir: &str,
    file_name: &str,
    xdg_data_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = xdg_root(xdg_data_home, home, ".local/share")?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn xdg_root(
    xdg_home: Option<&Path>,
    home: Option<&Path>,
    home_fallback: &str,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(home_fallback))
}
