use std::path::PathBuf;
use std::{fs, io};

use crate::data_path;

pub const LOG_FILE: &str = "tickerfloat-current.log";
pub const PREVIOUS_LOG_FILE: &str = "tickerfloat-previous.log";

/// دریافت مسیر کامل فایل لاگ و اطمینان از وجود پوشه مربوطه
pub fn path() -> Result<PathBuf, Error> {
    let full_path = data_path(Some(LOG_FILE));

    let parent = full_path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid log file path"))?;

    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    Ok(full_path)
}

/// مسیر فایل لاگ اجرای قبلی، کنار فایل لاگ فعلی
pub fn previous_path(current: &std::path::Path) -> PathBuf {
    current
        .parent()
        .map_or_else(|| PathBuf::from(PREVIOUS_LOG_FILE), |dir| dir.join(PREVIOUS_LOG_FILE))
}

/// انواع خطاهای مربوط به سیستم لاگینگ
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error), // خطاهای ورودی/خروجی
    #[error(transparent)]
    SetLog(#[from] log::SetLoggerError), // خطای تنظیم لاگر
    #[error(transparent)]
    ParseLevel(#[from] log::ParseLevelError), // خطای پارس کردن سطح لاگ
}
