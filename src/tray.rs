use iced_futures::{
    futures::{SinkExt, Stream, StreamExt, channel::mpsc},
    stream,
};
use tray_icon::{
    Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent,
    menu::{Menu, MenuEvent, MenuId, MenuItem},
};

use std::path::{Path, PathBuf};

pub const TOOLTIP: &str = "Crypto Price Ticker";

const TOGGLE_ID: &str = "toggle";
const QUIT_ID: &str = "quit";

// ابعاد آیکون جایگزین
const FALLBACK_ICON_SIZE: u32 = 32;

/// خطاهای ساخت آیکون سینی سیستم
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tray icon: {0}")]
    Build(#[from] tray_icon::Error),
    #[error("tray menu: {0}")]
    Menu(#[from] tray_icon::menu::Error),
    #[error("tray icon image: {0}")]
    Icon(#[from] tray_icon::BadIcon),
    #[error("tray thread: {0}")]
    Thread(#[from] std::io::Error),
}

/// رویدادهای سینی سیستم که به حلقه رویداد برنامه فرستاده می‌شوند
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleVisibility, // نمایش/پنهان کردن پنجره
    Quit,             // خروج از برنامه
}

impl Event {
    fn from_menu(id: &MenuId) -> Option<Self> {
        match id.0.as_str() {
            TOGGLE_ID => Some(Event::ToggleVisibility),
            QUIT_ID => Some(Event::Quit),
            _ => None,
        }
    }

    /// کلیک چپ روی خود آیکون هم پنجره را نمایش/پنهان می‌کند
    fn from_tray(event: &TrayIconEvent) -> Option<Self> {
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => Some(Event::ToggleVisibility),
            _ => None,
        }
    }
}

/// آیکون سینی سیستم؛ تا زمانی که این مقدار زنده است آیکون نمایش داده می‌شود
pub struct Tray {
    #[cfg(not(target_os = "linux"))]
    _icon: TrayIcon,
    #[cfg(target_os = "linux")]
    _thread: std::thread::JoinHandle<()>,
}

impl Tray {
    /// ساخت آیکون و منوی سینی سیستم
    #[cfg(not(target_os = "linux"))]
    pub fn install(icon_path: &Path) -> Result<Self, Error> {
        Ok(Self {
            _icon: build(icon_path)?,
        })
    }

    /// در لینوکس آیکون باید در تردی با حلقه رویداد GTK ساخته شود
    #[cfg(target_os = "linux")]
    pub fn install(icon_path: &Path) -> Result<Self, Error> {
        let icon_path = icon_path.to_path_buf();

        let thread = std::thread::Builder::new()
            .name("tray-thread".to_string())
            .spawn(move || {
                if let Err(e) = gtk::init() {
                    log::error!("Failed to initialize GTK for the tray icon: {e}");
                    return;
                }

                let _tray = match build(&icon_path) {
                    Ok(tray) => tray,
                    Err(e) => {
                        log::error!("Failed to create tray icon: {e}");
                        return;
                    }
                };

                gtk::main();
            })?;

        Ok(Self { _thread: thread })
    }
}

fn build(icon_path: &Path) -> Result<TrayIcon, Error> {
    let toggle = MenuItem::with_id(TOGGLE_ID, "Show/Hide", true, None);
    let quit = MenuItem::with_id(QUIT_ID, "Quit", true, None);
    let menu = Menu::with_items(&[&toggle, &quit])?;

    let (rgba, width, height) = icon_rgba(icon_path);
    let icon = Icon::from_rgba(rgba, width, height)?;

    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_menu_on_left_click(false)
        .with_tooltip(TOOLTIP)
        .with_icon(icon)
        .build()?;

    log::info!("Tray icon ready");
    Ok(tray)
}

/// بارگذاری تصویر آیکون؛ اگر فایل وجود نداشته باشد یا خوانا نباشد آیکون عمومی ساخته می‌شود
fn icon_rgba(path: &Path) -> (Vec<u8>, u32, u32) {
    match image::open(path) {
        Ok(image) => {
            let image = image.into_rgba8();
            let (width, height) = image.dimensions();
            (image.into_raw(), width, height)
        }
        Err(e) => {
            log::warn!(
                "Tray icon {} unavailable ({e}), using the generic icon",
                path.display()
            );
            fallback_icon()
        }
    }
}

/// یک سکه ساده: دایره کهربایی روی زمینه شفاف
fn fallback_icon() -> (Vec<u8>, u32, u32) {
    let size = FALLBACK_ICON_SIZE;
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0 - 1.0;

    let rgba = (0..size * size)
        .flat_map(|i| {
            let (x, y) = ((i % size) as f32, (i / size) as f32);
            let inside = (x - center).hypot(y - center) <= radius;
            if inside {
                [0xF7, 0x93, 0x1A, 0xFF]
            } else {
                [0, 0, 0, 0]
            }
        })
        .collect();

    (rgba, size, size)
}

/// مسیر پیش‌فرض آیکون در کنار فایل اجرایی، وقتی مسیر تنظیم شده نسبی است و وجود ندارد
pub fn resolve_icon_path(configured: &Path) -> PathBuf {
    if configured.is_relative() && !configured.exists() {
        if let Some(beside_exe) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(configured)))
            .filter(|p| p.exists())
        {
            return beside_exe;
        }
    }
    configured.to_path_buf()
}

/// جریان رویدادهای منو و آیکون سینی سیستم برای استفاده در `Subscription::run`
pub fn events() -> impl Stream<Item = Event> {
    stream::channel(16, async move |mut output| {
        let (sender, mut receiver) = mpsc::unbounded();

        let menu_sender = sender.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            if let Some(event) = Event::from_menu(&event.id) {
                let _ = menu_sender.unbounded_send(event);
            }
        }));
        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            if let Some(event) = Event::from_tray(&event) {
                let _ = sender.unbounded_send(event);
            }
        }));

        while let Some(event) = receiver.next().await {
            if output.send(event).await.is_err() {
                break;
            }
        }
    })
}
