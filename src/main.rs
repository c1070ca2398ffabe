// غیرفعال کردن کنسول در ویندوز برای نسخه‌های ریلیز
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod logger; // سیستم ثبت وقایع (Log)
mod style; // استایل‌های ظاهری
mod ticker; // پنجره شناور قیمت‌ها
mod tray; // آیکون سینی سیستم
mod widget; // ویجت‌های رابط کاربری
mod window; // مدیریت پنجره‌های سیستم‌عامل

use data::Config;
use exchange::{CoinQuote, PriceFetcher};
use ticker::TickerView;

use iced::{Color, Element, Subscription, Task, Theme};
use std::time::Instant;

/// خطاهایی که شروع برنامه را متوقف می‌کنند
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("logger: {0}")]
    Logger(#[from] logger::Error),
    #[error("config: {0}")]
    Config(#[from] data::ConfigError),
    #[error("price fetcher: {0}")]
    Fetcher(#[from] exchange::AdapterError),
    #[error("gui: {0}")]
    Gui(#[from] iced::Error),
}

/// نقطه شروع برنامه
fn main() {
    if let Err(err) = run() {
        log::error!("Startup failed: {err}");
        eprintln!("tickerfloat: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StartupError> {
    logger::setup(cfg!(debug_assertions))?;

    let config = Config::load(Config::resolve_path(std::env::args().nth(1)))?;
    let fetcher = PriceFetcher::new(config.quote_request(), config.proxy_url.clone())?;

    // دریافت اولیه پیش از ساخت پنجره
    let seed = fetcher.fetch_blocking();

    iced::daemon(
        move || TickerFloat::new(config.clone(), fetcher.clone(), seed.clone()),
        TickerFloat::update,
        TickerFloat::view,
    )
    .settings(iced::Settings {
        antialiasing: true,
        default_text_size: iced::Pixels(style::TEXT_SIZE),
        ..Default::default()
    })
    .title(TickerFloat::title)
    .theme(TickerFloat::theme)
    .style(TickerFloat::style)
    .subscription(TickerFloat::subscription)
    .run()?;

    log::info!("Exited normally");
    Ok(())
}

/// وضعیت کلی برنامه؛ یک بار ساخته می‌شود و همه رویدادها روی همین ترد به آن می‌رسند
struct TickerFloat {
    config: Config,           // تنظیمات اتصال (تغییرناپذیر)
    fetcher: PriceFetcher,    // دریافت‌کننده قیمت‌ها
    ticker: TickerView,       // پنجره شناور
    tray: Option<tray::Tray>, // آیکون سینی سیستم، پس از باز شدن پنجره
    fetching: bool,           // آیا یک دریافت در جریان است؟
}

/// پیام‌هایی که وضعیت برنامه را تغییر می‌دهند
#[derive(Debug, Clone)]
enum Message {
    WindowOpened(window::Id),      // پنجره اصلی باز شد
    Tick(Instant),                 // تیک زمان‌بندی به‌روزرسانی
    QuotesFetched(Vec<CoinQuote>), // نتیجه یک دریافت (در صورت خطا خالی)
    WindowEvent(window::Event),    // رویدادهای پنجره (مانند بستن)
    Tray(tray::Event),             // رویدادهای سینی سیستم
    DragStarted,                   // کلیک چپ روی سطح پنجره
}

impl TickerFloat {
    fn new(
        config: Config,
        fetcher: PriceFetcher,
        seed: Vec<CoinQuote>,
    ) -> (Self, Task<Message>) {
        let (ticker, open_window) = TickerView::open(seed);

        let state = Self {
            config,
            fetcher,
            ticker,
            tray: None,
            fetching: false,
        };

        (state, open_window.map(Message::WindowOpened))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                log::info!("Ticker window {id:?} opened");

                if self.tray.is_none() {
                    let icon_path = tray::resolve_icon_path(&self.config.tray_icon);
                    match tray::Tray::install(&icon_path) {
                        Ok(tray) => self.tray = Some(tray),
                        Err(err) => log::error!("Failed to create tray icon: {err}"),
                    }
                }
            }
            Message::Tick(_) => {
                if self.fetching {
                    log::debug!("Previous fetch still running, skipping this tick");
                    return Task::none();
                }
                self.fetching = true;

                let fetcher = self.fetcher.clone();
                return Task::perform(
                    async move { fetcher.fetch().await },
                    Message::QuotesFetched,
                );
            }
            Message::QuotesFetched(quotes) => {
                self.fetching = false;
                self.ticker.update_all(quotes);
            }
            Message::WindowEvent(window::Event::CloseRequested(id)) => {
                if id == self.ticker.id() {
                    return self.ticker.quit();
                }
                return iced::window::close(id);
            }
            Message::Tray(tray::Event::ToggleVisibility) => {
                return self.ticker.toggle_visibility();
            }
            Message::Tray(tray::Event::Quit) => {
                return self.ticker.quit();
            }
            Message::DragStarted => {
                return self.ticker.drag();
            }
        }

        Task::none()
    }

    fn view(&self, _window: window::Id) -> Element<'_, Message> {
        self.ticker.view()
    }

    fn title(&self, _window: window::Id) -> String {
        tray::TOOLTIP.to_string()
    }

    fn theme(&self, _window: window::Id) -> Theme {
        Theme::Light
    }

    /// پس‌زمینه شفاف تا فقط سطح گرد و کم‌رنگ پنجره دیده شود
    fn style(&self, theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_events = window::events().map(Message::WindowEvent);
        let tray_events = Subscription::run(tray::events).map(Message::Tray);

        // به‌روزرسانی دوره‌ای قیمت‌ها
        let refresh = iced::time::every(self.config.refresh_interval).map(Message::Tick);

        Subscription::batch(vec![window_events, tray_events, refresh])
    }
}
