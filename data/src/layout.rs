/// ابعاد و ظاهر ثابت پنجره شناور قیمت‌ها
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerSpec {
    pub width: f32,   // عرض پنجره
    pub height: f32,  // ارتفاع پنجره
    pub opacity: f32, // شفافیت کل سطح (۰ تا ۱)
}

impl TickerSpec {
    pub const DEFAULT: Self = Self {
        width: 300.0,
        height: 300.0,
        opacity: 0.2,
    };
}

impl Default for TickerSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// وضعیت نمایش پنجره که از منوی سینی سیستم تغییر می‌کند
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    /// جابجایی بین نمایش و پنهان
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        };
        *self
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_visibility() {
        for original in [Visibility::Shown, Visibility::Hidden] {
            let mut visibility = original;

            let after_first = visibility.toggle();
            assert_ne!(after_first, original);

            visibility.toggle();
            assert_eq!(visibility, original);
        }
    }

    #[test]
    fn starts_visible() {
        assert!(Visibility::default().is_visible());
    }
}
