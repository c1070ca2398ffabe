use super::{super::CoinQuote, AdapterError};
use crate::http;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

const SYMBOL_PARAM: &str = "symbol";
const API_KEY_PARAM: &str = "CMC_PRO_API_KEY";

/// پارامترهای درخواست قیمت از CoinMarketCap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub url: String,     // آدرس endpoint (مثلاً .../v1/cryptocurrency/quotes/latest)
    pub api_key: String, // کلید API
    pub symbols: String, // لیست نمادها جدا شده با کاما
}

impl QuoteRequest {
    fn query(&self) -> [(&'static str, &str); 2] {
        [
            (SYMBOL_PARAM, self.symbols.as_str()),
            (API_KEY_PARAM, self.api_key.as_str()),
        ]
    }
}

/// ساختار پاسخ؛ ترتیب کلیدهای `data` همان ترتیب بدنه پاسخ است
#[derive(Deserialize)]
struct QuotesResponse {
    data: Map<String, Value>,
}

/// نسخه v1 برای هر نماد یک شیء و نسخه v2 یک آرایه برمی‌گرداند
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Single(Entry),
    Many(Vec<Entry>),
}

#[derive(Deserialize)]
struct Entry {
    quote: Quote,
}

#[derive(Deserialize)]
struct Quote {
    #[serde(rename = "USD")]
    usd: UsdQuote,
}

#[derive(Deserialize)]
struct UsdQuote {
    price: f64,
    percent_change_24h: f64,
}

impl Listing {
    fn into_usd(self) -> Option<UsdQuote> {
        match self {
            Listing::Single(entry) => Some(entry.quote.usd),
            Listing::Many(entries) => entries.into_iter().next().map(|e| e.quote.usd),
        }
    }
}

impl QuotesResponse {
    fn into_quotes(self) -> Result<Vec<CoinQuote>, AdapterError> {
        self.data
            .into_iter()
            .map(|(symbol, value)| {
                let listing: Listing = serde_json::from_value(value).map_err(|e| {
                    AdapterError::Parse(format!("Malformed quote for {symbol}: {e}"))
                })?;

                let usd = listing
                    .into_usd()
                    .ok_or_else(|| AdapterError::Parse(format!("No quote entries for {symbol}")))?;

                Ok(CoinQuote::new(symbol, usd.price, usd.percent_change_24h))
            })
            .collect()
    }
}

/// پارس کردن بدنه پاسخ به لیست قیمت‌ها
pub fn parse_quotes(body: &str) -> Result<Vec<CoinQuote>, AdapterError> {
    http::parse_body::<QuotesResponse>(body)?.into_quotes()
}

/// دریافت آخرین قیمت‌ها برای نمادهای درخواست شده
pub async fn fetch_quotes(
    client: &Client,
    request: &QuoteRequest,
) -> Result<Vec<CoinQuote>, AdapterError> {
    let builder = client.get(&request.url).query(&request.query());

    http::http_parse::<QuotesResponse>(builder)
        .await?
        .into_quotes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const FIXTURE: &str = r#"{
        "status": { "error_code": 0, "error_message": null },
        "data": {
            "SOL": { "symbol": "SOL", "quote": { "USD": { "price": 142.07, "percent_change_24h": 5.5 } } },
            "BTC": { "symbol": "BTC", "quote": { "USD": { "price": 1234.5, "percent_change_24h": -3.141 } } },
            "ETH": { "symbol": "ETH", "quote": { "USD": { "price": 3051.123456, "percent_change_24h": 0.004 } } }
        }
    }"#;

    #[test]
    fn one_quote_per_entry_with_fixed_precision() {
        let quotes = parse_quotes(FIXTURE).expect("fixture should parse");
        assert_eq!(quotes.len(), 3);

        let price_re = Regex::new(r"^-?\d+\.\d{3}$").unwrap();
        let change_re = Regex::new(r"^-?\d+\.\d{2}%$").unwrap();

        for quote in &quotes {
            assert!(price_re.is_match(&quote.price), "price {}", quote.price);
            assert!(change_re.is_match(&quote.change), "change {}", quote.change);
        }
    }

    #[test]
    fn formats_reference_quote() {
        let quotes = parse_quotes(FIXTURE).unwrap();
        let btc = quotes.iter().find(|q| q.name == "BTC").unwrap();

        assert_eq!(btc.price, "1234.500");
        assert_eq!(btc.change, "-3.14%");
    }

    #[test]
    fn keeps_response_key_order() {
        let names: Vec<_> = parse_quotes(FIXTURE)
            .unwrap()
            .into_iter()
            .map(|q| q.name)
            .collect();

        assert_eq!(names, ["SOL", "BTC", "ETH"]);
    }

    #[test]
    fn accepts_array_listings() {
        let body = r#"{ "data": { "BTC": [
            { "quote": { "USD": { "price": 1.0, "percent_change_24h": 2.0 } } },
            { "quote": { "USD": { "price": 9.0, "percent_change_24h": 9.0 } } }
        ] } }"#;

        let quotes = parse_quotes(body).unwrap();
        assert_eq!(quotes, vec![CoinQuote::new("BTC", 1.0, 2.0)]);
    }

    #[test]
    fn empty_data_gives_no_quotes() {
        assert!(parse_quotes(r#"{ "data": {} }"#).unwrap().is_empty());
    }

    #[test]
    fn missing_fields_are_parse_errors() {
        let body = r#"{ "data": { "BTC": { "quote": { "USD": { "price": 1.0 } } } } }"#;
        let err = parse_quotes(body).unwrap_err();
        assert!(matches!(err, AdapterError::Parse(msg) if msg.contains("BTC")));

        let body = r#"{ "status": { "error_code": 1001 } }"#;
        assert!(matches!(parse_quotes(body), Err(AdapterError::Parse(_))));
    }

    #[test]
    fn null_price_is_a_parse_error() {
        let body = r#"{ "data": { "XYZ": { "quote": { "USD": { "price": null, "percent_change_24h": 1.0 } } } } }"#;
        assert!(parse_quotes(body).is_err());
    }

    #[test]
    fn empty_listing_array_is_a_parse_error() {
        let err = parse_quotes(r#"{ "data": { "BTC": [] } }"#).unwrap_err();
        assert!(matches!(err, AdapterError::Parse(msg) if msg.contains("No quote entries")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_quotes(r#"{ "data": "#),
            Err(AdapterError::Parse(_))
        ));
    }
}
