use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static CARD_TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static METRIC: Lazy<Style> = Lazy::new(|| Style::new().cyan());
