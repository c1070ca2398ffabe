use exchange::adapter::coinmarketcap::QuoteRequest;
use ini::Ini;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.ini";
pub const CONFIG_PATH_ENV: &str = "TICKERFLOAT_CONFIG";
pub const DEFAULT_TRAY_ICON: &str = "./timg3.jpg";

/// بیشترین فاصله به‌روزرسانی مجاز (یک روز)
pub const MAX_REFRESH_SECS: u64 = 86_400;

// بخش‌ها و کلیدهای فایل تنظیمات
const SETTINGS: &str = "settings";
const COINS: &str = "coins";
const PROXY: &str = "proxy";
const FLUSH: &str = "flush";
const TRAY: &str = "tray";

/// تنظیمات اتصال که یک بار در شروع برنامه بارگذاری می‌شود و دیگر تغییر نمی‌کند
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,            // کلید API
    pub endpoint_url: String,       // آدرس endpoint قیمت‌ها
    pub symbols: String,            // نمادها جدا شده با کاما
    pub proxy_url: Option<String>,  // پروکسی اختیاری برای HTTP و HTTPS
    pub refresh_interval: Duration, // فاصله به‌روزرسانی
    pub tray_icon: PathBuf,         // مسیر تصویر آیکون سینی سیستم
}

/// خطاهای بارگذاری تنظیمات؛ همه در شروع برنامه کشنده هستند
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config file: {0}")]
    Parse(#[from] ini::ParseError),
    #[error("missing required key `{key}` in section [{section}]")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },
    #[error("flush_interval must be between 1 and 86400 seconds, got `{0}`")]
    InvalidInterval(String),
}

impl Config {
    /// مسیر فایل تنظیمات: آرگومان اول خط فرمان، سپس متغیر محیطی و در نهایت `config.ini`
    pub fn resolve_path(arg: Option<String>) -> PathBuf {
        arg.or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
    }

    /// بارگذاری و اعتبارسنجی تنظیمات از فایل
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&text)?;
        log::info!(
            "Loaded config from {} (symbols: {}, every {:?}{})",
            path.display(),
            config.symbols,
            config.refresh_interval,
            if config.proxy_url.is_some() { ", via proxy" } else { "" },
        );

        Ok(config)
    }

    /// پارس کردن متن INI؛ برای کلیدهای الزامی هیچ مقدار پیش‌فرضی ساخته نمی‌شود
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text)?;

        let api_key = required(&ini, SETTINGS, "api_key")?;
        let endpoint_url = required(&ini, SETTINGS, "url")?;
        let symbols = required(&ini, COINS, "symbols")?;
        let interval = required(&ini, FLUSH, "flush_interval")?;

        let refresh_interval = match interval.parse::<u64>() {
            Ok(secs @ 1..=MAX_REFRESH_SECS) => Duration::from_secs(secs),
            _ => return Err(ConfigError::InvalidInterval(interval)),
        };

        Ok(Self {
            api_key,
            endpoint_url,
            symbols,
            proxy_url: optional(&ini, PROXY, "proxy_http"),
            refresh_interval,
            tray_icon: optional(&ini, TRAY, "icon")
                .map_or_else(|| PathBuf::from(DEFAULT_TRAY_ICON), PathBuf::from),
        })
    }

    /// پارامترهای درخواست قیمت برای تامین‌کننده
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest {
            url: self.endpoint_url.clone(),
            api_key: self.api_key.clone(),
            symbols: self.symbols.clone(),
        }
    }
}

fn optional(ini: &Ini, section: &str, key: &str) -> Option<String> {
    ini.get_from(Some(section), key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(
    ini: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<String, ConfigError> {
    optional(ini, section, key).ok_or(ConfigError::MissingKey { section, key })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
[settings]
api_key = secret-key
url = https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest

[coins]
symbols = BTC,ETH, SOL

[proxy]
proxy_http =

[flush]
flush_interval = 30
";

    #[test]
    fn parses_all_sections() {
        let config = Config::parse(VALID).unwrap();

        assert_eq!(config.api_key, "secret-key");
        assert_eq!(
            config.endpoint_url,
            "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest"
        );
        assert_eq!(config.symbols, "BTC,ETH, SOL");
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.tray_icon, PathBuf::from(DEFAULT_TRAY_ICON));
    }

    #[test]
    fn blank_or_missing_proxy_means_none() {
        assert_eq!(Config::parse(VALID).unwrap().proxy_url, None);

        let without_section = VALID.replace("[proxy]\nproxy_http =\n", "");
        assert_eq!(Config::parse(&without_section).unwrap().proxy_url, None);
    }

    #[test]
    fn proxy_is_read_when_present() {
        let text = VALID.replace("proxy_http =", "proxy_http = http://127.0.0.1:7890");
        assert_eq!(
            Config::parse(&text).unwrap().proxy_url.as_deref(),
            Some("http://127.0.0.1:7890")
        );
    }

    #[test]
    fn tray_icon_can_be_configured() {
        let text = format!("{VALID}\n[tray]\nicon = /usr/share/icons/coin.png\n");
        assert_eq!(
            Config::parse(&text).unwrap().tray_icon,
            PathBuf::from("/usr/share/icons/coin.png")
        );
    }

    #[test]
    fn missing_required_keys_fail_fast() {
        let cases = [
            ("api_key = secret-key\n", "settings", "api_key"),
            ("symbols = BTC,ETH, SOL\n", "coins", "symbols"),
            ("flush_interval = 30\n", "flush", "flush_interval"),
        ];

        for (line, section, key) in cases {
            let text = VALID.replace(line, "");
            match Config::parse(&text) {
                Err(ConfigError::MissingKey { section: s, key: k }) => {
                    assert_eq!((s, k), (section, key));
                }
                other => panic!("expected missing {section}.{key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn blank_required_key_counts_as_missing() {
        let text = VALID.replace("api_key = secret-key", "api_key =");
        assert!(matches!(
            Config::parse(&text),
            Err(ConfigError::MissingKey { key: "api_key", .. })
        ));
    }

    #[test]
    fn interval_must_be_positive_integer() {
        for bad in ["0", "-5", "ten", "1.5", "86401", "18446744073709551615"] {
            let text = VALID.replace("flush_interval = 30", &format!("flush_interval = {bad}"));
            assert!(
                matches!(Config::parse(&text), Err(ConfigError::InvalidInterval(v)) if v == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn longest_interval_is_accepted() {
        let text = VALID.replace("flush_interval = 30", "flush_interval = 86400");
        assert_eq!(
            Config::parse(&text).unwrap().refresh_interval,
            Duration::from_secs(MAX_REFRESH_SECS)
        );
    }

    #[test]
    fn keys_and_sections_ignore_case() {
        let text = "\
[Settings]
API_KEY = secret-key
Url = https://example.com/quotes

[COINS]
Symbols = BTC

[Flush]
FLUSH_INTERVAL = 15
";
        let config = Config::parse(text).unwrap();
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.symbols, "BTC");
        assert_eq!(config.refresh_interval, Duration::from_secs(15));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load("/nonexistent/tickerfloat/config.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn quote_request_mirrors_connection_settings() {
        let request = Config::parse(VALID).unwrap().quote_request();
        assert_eq!(request.api_key, "secret-key");
        assert_eq!(request.symbols, "BTC,ETH, SOL");
    }

    #[test]
    fn explicit_path_wins() {
        assert_eq!(
            Config::resolve_path(Some("other.ini".to_string())),
            PathBuf::from("other.ini")
        );
    }
}
