use data::layout::TickerSpec;
use iced::{Size, Subscription, window};

pub use iced::window::{Id, Settings, open};

/// رویدادهای مربوط به پنجره
#[derive(Debug, Clone, Copy)]
pub enum Event {
    CloseRequested(window::Id), // درخواست بستن پنجره
}

/// گوش دادن به رویدادهای پنجره
pub fn events() -> Subscription<Event> {
    iced::event::listen_with(filtered_events)
}

/// فیلتر کردن رویدادهای خام سیستم و تبدیل به رویدادهای پنجره برنامه
fn filtered_events(
    event: iced::Event,
    _status: iced::event::Status,
    window: window::Id,
) -> Option<Event> {
    match &event {
        iced::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Event::CloseRequested(window))
        }
        _ => None,
    }
}

/// تنظیمات مشترک پنجره شناور: بدون قاب، شفاف و همیشه رو
fn ticker_base(spec: &TickerSpec) -> Settings {
    Settings {
        size: Size::new(spec.width, spec.height),
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        exit_on_close_request: false,
        ..Default::default()
    }
}

#[cfg(target_os = "linux")]
/// تنظیمات پنجره برای سیستم‌عامل لینوکس
pub fn settings(spec: &TickerSpec) -> Settings {
    Settings {
        platform_specific: window::settings::PlatformSpecific {
            application_id: "tickerfloat".to_string(),
            ..Default::default()
        },
        ..ticker_base(spec)
    }
}

#[cfg(target_os = "macos")]
/// تنظیمات پنجره برای سیستم‌عامل مک (macOS)
pub fn settings(spec: &TickerSpec) -> Settings {
    Settings {
        platform_specific: window::settings::PlatformSpecific {
            title_hidden: true,
            titlebar_transparent: true,
            fullsize_content_view: true,
        },
        ..ticker_base(spec)
    }
}

#[cfg(target_os = "windows")]
/// تنظیمات پنجره برای سیستم‌عامل ویندوز؛ پنجره در نوار وظیفه نمایش داده نمی‌شود
pub fn settings(spec: &TickerSpec) -> Settings {
    Settings {
        platform_specific: window::settings::PlatformSpecific {
            skip_taskbar: true,
            ..Default::default()
        },
        ..ticker_base(spec)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn settings(spec: &TickerSpec) -> Settings {
    ticker_base(spec)
}
