use crate::adapter::AdapterError;
use crate::util::body_preview;

use reqwest::{Client, Proxy, RequestBuilder, header};
use serde::Deserialize;
use std::time::Duration;

/// حداکثر زمان انتظار برای یک درخواست، تا حلقه به‌روزرسانی هرگز گیر نکند
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const PREVIEW_LEN: usize = 200;

/// ساخت کلاینت HTTP؛ در صورت وجود پروکسی، برای هر دو پروتکل HTTP و HTTPS اعمال می‌شود
pub fn client(proxy: Option<&str>) -> Result<Client, AdapterError> {
    let mut builder = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .default_headers(default_headers());

    if let Some(url) = proxy {
        let proxy = Proxy::all(url).map_err(AdapterError::InvalidProxy)?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(AdapterError::Fetch)
}

fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    headers
}

/// بلوک وضعیت که API در پاسخ‌های خطا برمی‌گرداند
#[derive(Deserialize)]
struct ErrorBody {
    status: ErrorStatus,
}

#[derive(Deserialize)]
struct ErrorStatus {
    error_message: Option<String>,
}

/// ارسال درخواست و دریافت بدنه متنی پاسخ؛ وضعیت‌های غیر 2xx به خطا تبدیل می‌شوند
pub async fn http_request(request: RequestBuilder) -> Result<String, AdapterError> {
    let response = request.send().await.map_err(AdapterError::Fetch)?;

    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await.map_err(AdapterError::Fetch)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.status.error_message)
            .unwrap_or_else(|| body_preview(&body, PREVIEW_LEN));

        log::error!("HTTP error {status} for: {url}");
        return Err(AdapterError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

/// ارسال درخواست و پارس کردن بدنه پاسخ به صورت JSON
pub async fn http_parse<V>(request: RequestBuilder) -> Result<V, AdapterError>
where
    V: serde::de::DeserializeOwned,
{
    let body = http_request(request).await?;
    parse_body(&body)
}

/// بررسی و پارس بدنه پاسخ با پیام‌های خطای قابل فهم
pub fn parse_body<V>(body: &str) -> Result<V, AdapterError>
where
    V: serde::de::DeserializeOwned,
{
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return Err(AdapterError::Parse("Empty response body".to_string()));
    }
    if trimmed.starts_with('<') {
        return Err(AdapterError::Parse(format!(
            "Non-JSON (HTML?) response | len={} | preview={:?}",
            body.len(),
            body_preview(body, PREVIEW_LEN)
        )));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        AdapterError::Parse(format!(
            "JSON parse failed: {} | response_len={} | preview={:?}",
            e,
            body.len(),
            body_preview(body, PREVIEW_LEN)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_rejected() {
        let err = parse_body::<serde_json::Value>("   ").unwrap_err();
        assert!(matches!(err, AdapterError::Parse(msg) if msg.contains("Empty")));
    }

    #[test]
    fn html_body_is_rejected() {
        let err = parse_body::<serde_json::Value>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AdapterError::Parse(msg) if msg.contains("HTML")));
    }

    #[test]
    fn proxy_is_optional() {
        assert!(client(None).is_ok());
        assert!(client(Some("http://127.0.0.1:8080")).is_ok());
    }

    #[test]
    fn malformed_proxy_is_rejected() {
        let err = client(Some("not a url")).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidProxy(_)));
    }
}
