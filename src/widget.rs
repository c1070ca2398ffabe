use crate::style;

use data::Row;
use iced::{
    Alignment, Element,
    Length::Fill,
    Theme,
    widget::{row, scrollable, text},
};

/// ایجاد یک محتوای قابل اسکرول (عمودی) با اسکرول‌بار باریک
pub fn scrollable_content<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    opacity: f32,
) -> Element<'a, Message> {
    scrollable::Scrollable::with_direction(
        content,
        scrollable::Direction::Vertical(scrollable::Scrollbar::new().width(4).scroller_width(4)),
    )
    .style(move |theme, status| style::scroll_bar(theme, status, opacity))
    .into()
}

/// یک ردیف قیمت: نام، قیمت و درصد تغییر کنار هم
pub fn quote_row<'a, Message: 'a>(quote: &'a Row, opacity: f32) -> Element<'a, Message> {
    let is_falling = quote.is_falling();

    row![
        text(&quote.name)
            .width(Fill)
            .style(move |_theme: &Theme| style::quote_text(opacity)),
        text(&quote.price)
            .width(Fill)
            .style(move |_theme: &Theme| style::quote_text(opacity)),
        text(&quote.change)
            .width(Fill)
            .align_x(Alignment::End)
            .style(move |theme: &Theme| style::change_text(theme, is_falling, opacity)),
    ]
    .spacing(1)
    .align_y(Alignment::Center)
    .into()
}
