pub mod adapter;
pub mod fetcher;
mod http;
pub mod util;

pub use adapter::AdapterError;
pub use fetcher::PriceFetcher;

/// یک قیمت آماده نمایش برای یک ارز
///
/// همه فیلدها از قبل قالب‌بندی شده‌اند و لایه نمایش هیچ محاسبه عددی روی آن‌ها انجام نمی‌دهد.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinQuote {
    pub name: String,   // نماد ارز (مثلاً BTC)
    pub price: String,  // قیمت با سه رقم اعشار
    pub change: String, // درصد تغییر ۲۴ ساعته با دو رقم اعشار و علامت ٪
}

impl CoinQuote {
    /// ساخت یک قیمت از مقادیر عددی خام
    pub fn new(name: impl Into<String>, price: f64, percent_change_24h: f64) -> Self {
        Self {
            name: name.into(),
            price: util::format_price(price),
            change: util::format_change(percent_change_24h),
        }
    }
}
