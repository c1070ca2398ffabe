use exchange::CoinQuote;

/// لیست فعلی قیمت‌ها؛ در هر به‌روزرسانی به طور کامل جایگزین می‌شود
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceList {
    quotes: Vec<CoinQuote>,
}

impl PriceList {
    /// جایگزینی کامل لیست (بدون ادغام)
    pub fn replace(&mut self, quotes: Vec<CoinQuote>) {
        self.quotes = quotes;
    }

    #[cfg(test)]
    pub fn quotes(&self) -> &[CoinQuote] {
        &self.quotes
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }
}

/// متن‌های یک ردیف نمایش داده شده (نام، قیمت، تغییر)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub price: String,
    pub change: String,
}

impl Row {
    fn set(&mut self, quote: &CoinQuote) {
        self.name.clone_from(&quote.name);
        self.price.clone_from(&quote.price);
        self.change.clone_from(&quote.change);
    }

    pub fn is_falling(&self) -> bool {
        self.change.starts_with('-')
    }
}

/// خطاهای به‌روزرسانی ردیف‌ها
///
/// تغییر ردیف‌ها در حال حاضر هیچ حالت خطایی ندارد؛ مرز خطا در `update_all` باقی است.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {}

/// وضعیت پنجره قیمت‌ها: مدل لیست به همراه ردیف‌های نمایش داده شده
///
/// ردیف‌ها بر اساس اندیس دوباره استفاده می‌شوند و فقط وقتی لیست جدید بلندتر باشد اضافه می‌شوند.
/// وقتی لیست کوتاه‌تر می‌شود ردیف‌های اضافی حذف نمی‌شوند و داده قبلی خود را نشان می‌دهند.
#[derive(Debug, Clone, Default)]
pub struct Board {
    list: PriceList,
    rows: Vec<Row>,
}

impl Board {
    /// ساخت وضعیت اولیه با یک ردیف برای هر قیمت
    pub fn new(quotes: Vec<CoinQuote>) -> Self {
        let mut board = Self::default();
        board.update_all(quotes);
        board
    }

    #[cfg(test)]
    pub fn list(&self) -> &PriceList {
        &self.list
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// جایگزینی لیست و به‌روزرسانی ردیف‌ها
    ///
    /// خطاها لاگ می‌شوند و به بالا منتقل نمی‌شوند؛ ردیف‌هایی که تا آن لحظه به‌روز شده‌اند باقی می‌مانند.
    pub fn update_all(&mut self, quotes: Vec<CoinQuote>) {
        self.list.replace(quotes);

        if let Err(err) = self.sync_rows() {
            log::error!("Failed to update coin list: {err}");
        }
    }

    fn sync_rows(&mut self) -> Result<(), RenderError> {
        let Self { list, rows } = self;

        for (index, quote) in list.quotes.iter().enumerate() {
            ensure_row(rows, index).set(quote);
        }
        Ok(())
    }
}

/// ردیف اندیس `index` را برمی‌گرداند و در صورت نبود، ردیف‌های لازم را اضافه می‌کند
fn ensure_row(rows: &mut Vec<Row>, index: usize) -> &mut Row {
    if index >= rows.len() {
        rows.resize_with(index + 1, Row::default);
    }

    &mut rows[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(prefix: &str, n: usize) -> Vec<CoinQuote> {
        (0..n)
            .map(|i| CoinQuote::new(format!("{prefix}{i}"), 100.0 + i as f64, i as f64))
            .collect()
    }

    fn names(board: &Board) -> Vec<&str> {
        board.rows().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn initial_board_has_one_row_per_quote() {
        let board = Board::new(quotes("A", 3));
        assert_eq!(board.rows().len(), 3);
        assert_eq!(board.list().len(), 3);
    }

    #[test]
    fn growing_list_updates_in_place_then_appends() {
        let mut board = Board::new(quotes("A", 3));
        board.update_all(quotes("B", 5));

        assert_eq!(names(&board), ["B0", "B1", "B2", "B3", "B4"]);
        assert_eq!(board.rows()[4].price, "104.000");
        assert_eq!(board.list().quotes(), quotes("B", 5).as_slice());
    }

    #[test]
    fn shrinking_list_keeps_stale_rows() {
        let mut board = Board::new(quotes("A", 5));
        board.update_all(quotes("B", 2));

        assert_eq!(names(&board), ["B0", "B1", "A2", "A3", "A4"]);
        assert_eq!(board.list().len(), 2);
    }

    #[test]
    fn empty_refresh_preserves_last_values() {
        let mut board = Board::new(quotes("A", 3));
        board.update_all(vec![]);

        assert_eq!(board.list().len(), 0);
        assert_eq!(names(&board), ["A0", "A1", "A2"]);
    }

    #[test]
    fn long_lists_get_a_row_per_quote() {
        let mut board = Board::new(quotes("A", 3));
        board.update_all(quotes("B", 300));

        assert_eq!(board.rows().len(), board.list().len());
        assert_eq!(board.rows()[299].name, "B299");
    }

    #[test]
    fn ensure_row_grows_on_demand() {
        let mut rows = Vec::new();

        ensure_row(&mut rows, 2).name = "X".to_string();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].name, "X");

        ensure_row(&mut rows, 1).name = "Y".to_string();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn falling_rows_are_detected() {
        let mut row = Row::default();
        row.set(&CoinQuote::new("BTC", 1.0, -0.5));
        assert!(row.is_falling());

        row.set(&CoinQuote::new("BTC", 1.0, 0.5));
        assert!(!row.is_falling());
    }
}
