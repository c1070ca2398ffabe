/// قالب‌بندی قیمت با دقیقاً سه رقم اعشار (صفرهای انتهایی حفظ می‌شوند)
pub fn format_price(value: f64) -> String {
    format!("{value:.3}")
}

/// قالب‌بندی درصد تغییر با دو رقم اعشار و علامت ٪ در انتها
pub fn format_change(value: f64) -> String {
    format!("{value:.2}%")
}

/// پیش‌نمایش کوتاه از بدنه پاسخ برای پیام‌های لاگ
pub fn body_preview(body: &str, n: usize) -> String {
    let trimmed = body.trim();
    let mut preview = trimmed.chars().take(n).collect::<String>();
    if trimmed.chars().count() > n {
        preview.push('…');
    }
    preview
}
