//! Display formatting helpers.
//!
//! The only place values get rounded. Amounts render in the platform's
//! display currency (BRL, pt-BR conventions) regardless of UI language;
//! dates follow the selected locale.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use foresti_translation::Locale;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount as Brazilian real, e.g. `R$ 25.000,00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Formats a date the way the selected locale writes short dates.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let pattern = match locale {
        Locale::En => "%m/%d/%Y",
        Locale::Pt => "%d/%m/%Y",
    };
    date.format(pattern).to_string()
}
