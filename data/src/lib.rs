pub mod config;
pub mod layout;
pub mod log;
pub mod ticker;

pub use config::{Config, ConfigError};
pub use layout::Visibility;
pub use ticker::{Board, PriceList, RenderError, Row};

use std::path::PathBuf;

const APP_DIR: &str = "tickerfloat";
const DATA_PATH_ENV: &str = "TICKERFLOAT_DATA_PATH";

/// مسیر پوشه داده‌های برنامه (یا یک فایل داخل آن)
///
/// با متغیر محیطی `TICKERFLOAT_DATA_PATH` قابل تغییر است.
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let base = match std::env::var_os(DATA_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR),
    };

    match path_name {
        Some(name) => base.join(name),
        None => base,
    }
}
