pub mod coinmarketcap;

/// خطاهای مربوط به دریافت و پردازش داده‌های قیمت
#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error), // خطای شبکه یا انتقال
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String }, // پاسخ غیر 2xx
    #[error("Parsing error: {0}")]
    Parse(String), // بدنه نامعتبر یا فیلدهای ناقص
    #[error("Invalid proxy: {0}")]
    InvalidProxy(reqwest::Error), // آدرس پروکسی نامعتبر
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error), // خطای ساخت ران‌تایم برای دریافت همگام
}
