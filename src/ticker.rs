use crate::{Message, style, widget, window};

use data::{Board, Visibility, layout::TickerSpec};
use exchange::CoinQuote;
use iced::{
    Element, Length, Task,
    widget::{column, container, mouse_area},
};

/// پنجره شناور قیمت‌ها: بدون قاب، همیشه رو و قابل جابجایی با کشیدن
pub struct TickerView {
    id: window::Id,
    spec: TickerSpec,
    board: Board,
    visibility: Visibility,
}

impl TickerView {
    /// باز کردن پنجره با ردیف‌های اولیه
    pub fn open(quotes: Vec<CoinQuote>) -> (Self, Task<window::Id>) {
        let spec = TickerSpec::default();
        let (id, open) = window::open(window::settings(&spec));

        let view = Self {
            id,
            spec,
            board: Board::new(quotes),
            visibility: Visibility::default(),
        };

        (view, open)
    }

    pub fn id(&self) -> window::Id {
        self.id
    }

    /// جایگزینی قیمت‌ها و به‌روزرسانی ردیف‌ها (ردیف‌ها هرگز کم نمی‌شوند)
    pub fn update_all(&mut self, quotes: Vec<CoinQuote>) {
        self.board.update_all(quotes);
    }

    /// نمایش/پنهان کردن پنجره
    pub fn toggle_visibility(&mut self) -> Task<Message> {
        let mode = if self.visibility.toggle().is_visible() {
            iced::window::Mode::Windowed
        } else {
            iced::window::Mode::Hidden
        };

        log::debug!("Ticker window is now {:?}", self.visibility);
        iced::window::set_mode(self.id, mode)
    }

    /// شروع جابجایی پنجره توسط سیستم پنجره‌ها؛ حرکت دقیقاً همراه نشانگر است
    pub fn drag(&self) -> Task<Message> {
        iced::window::drag(self.id)
    }

    /// خروج از کل برنامه (نه فقط پنهان کردن پنجره)
    pub fn quit(&self) -> Task<Message> {
        log::info!("Quit requested");
        iced::exit()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let opacity = self.spec.opacity;

        let rows = column(
            self.board
                .rows()
                .iter()
                .map(|row| widget::quote_row(row, opacity)),
        )
        .spacing(0);

        let surface = container(widget::scrollable_content(rows, opacity))
            .padding(5)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| style::ticker_surface(opacity));

        mouse_area(surface).on_press(Message::DragStarted).into()
    }
}
