use iced::widget::container::{self, Style};
use iced::widget::scrollable::{AutoScroll, Rail, Scroller};
use iced::widget::text;
use iced::{Border, Color, Shadow, Theme, widget};

/// اندازه پیش‌فرض متن (معادل ۱۰ پوینت)
pub const TEXT_SIZE: f32 = 13.0;

// رنگ زمینه روشن پنجره شناور
const SURFACE: Color = Color::from_rgb8(240, 240, 240);

/// استایل سطح اصلی پنجره قیمت‌ها؛ کل سطح با شفافیت ثابت کم رسم می‌شود
pub fn ticker_surface(opacity: f32) -> Style {
    Style {
        text_color: Some(Color::BLACK.scale_alpha(opacity)),
        background: Some(SURFACE.scale_alpha(opacity).into()),
        border: Border {
            radius: 10.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// متن معمولی ردیف‌ها (نام و قیمت)
pub fn quote_text(opacity: f32) -> text::Style {
    text::Style {
        color: Some(Color::BLACK.scale_alpha(opacity)),
    }
}

/// متن درصد تغییر؛ سبز برای افزایش و قرمز برای کاهش
pub fn change_text(theme: &Theme, is_falling: bool, opacity: f32) -> text::Style {
    let palette = theme.extended_palette();

    let color = if is_falling {
        palette.danger.strong.color
    } else {
        palette.success.strong.color
    };

    text::Style {
        color: Some(color.scale_alpha(opacity)),
    }
}

// Scrollable
// اسکرول‌بار باریک و کم‌رنگ تا روی قیمت‌ها را نپوشاند
pub fn scroll_bar(
    theme: &Theme,
    status: widget::scrollable::Status,
    opacity: f32,
) -> widget::scrollable::Style {
    let palette = theme.extended_palette();

    let scroller_bg = match status {
        widget::scrollable::Status::Hovered { .. } | widget::scrollable::Status::Dragged { .. } => {
            palette.background.strong.color
        }
        _ => palette.background.weak.color,
    };

    let rail = Rail {
        background: None,
        border: Border {
            radius: 2.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        scroller: Scroller {
            background: iced::Background::Color(scroller_bg.scale_alpha(opacity)),
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
    };

    let auto_scroll = AutoScroll {
        background: iced::Background::Color(palette.background.weakest.color),
        border: Border {
            radius: 2.0.into(),
            width: 1.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::TRANSPARENT,
            ..Default::default()
        },
        icon: palette.background.strong.color,
    };

    widget::scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll,
    }
}
