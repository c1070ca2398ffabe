use crate::{
    AdapterError, CoinQuote,
    adapter::coinmarketcap::{self, QuoteRequest},
    http,
};

use reqwest::Client;

/// دریافت‌کننده قیمت‌ها با سیاست «بهترین تلاش»
///
/// هر خطایی (شبکه، وضعیت HTTP، JSON نامعتبر یا فیلد ناقص) فقط لاگ می‌شود و نتیجه یک لیست خالی است؛
/// بنابراین فراخواننده هرگز به خاطر یک قطعی گذرا متوقف نمی‌شود.
#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    request: QuoteRequest,
    proxy: Option<String>,
}

impl PriceFetcher {
    /// ساخت دریافت‌کننده؛ آدرس پروکسی نامعتبر همین‌جا خطا می‌دهد
    pub fn new(request: QuoteRequest, proxy: Option<String>) -> Result<Self, AdapterError> {
        let client = http::client(proxy.as_deref())?;

        Ok(Self {
            client,
            request,
            proxy,
        })
    }

    /// یک درخواست و برگرداندن قیمت‌ها؛ در صورت خطا لیست خالی
    pub async fn fetch(&self) -> Vec<CoinQuote> {
        match coinmarketcap::fetch_quotes(&self.client, &self.request).await {
            Ok(quotes) => {
                log::info!("Fetched {} quotes for [{}]", quotes.len(), self.request.symbols);
                log::debug!("{quotes:?}");
                quotes
            }
            Err(err) => {
                log::error!("Failed to query coin price list: {err}");
                vec![]
            }
        }
    }

    /// نسخه همگام برای دریافت اولیه، پیش از شروع حلقه رویداد رابط کاربری
    ///
    /// یک ران‌تایم تک‌نخی موقت و یک کلاینت جداگانه می‌سازد تا اتصال‌های کلاینت اصلی
    /// به ران‌تایمی که بعداً از بین می‌رود وابسته نشوند.
    pub fn fetch_blocking(&self) -> Vec<CoinQuote> {
        let seeded = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AdapterError::from)
            .and_then(|runtime| {
                let fetcher = Self::new(self.request.clone(), self.proxy.clone())?;
                Ok(runtime.block_on(async move { fetcher.fetch().await }))
            });

        seeded.unwrap_or_else(|err| {
            log::error!("Failed to query coin price list: {err}");
            vec![]
        })
    }
}
