// core/src/money.rs

//! Prices are carried as integer minor units (cents) and only turned into
//! decimal strings at display time.

/// Formats an amount in cents with exactly two decimals, e.g. `2100` -> `"21.00"`.
pub fn format_cents(cents: i64) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Formats an amount with a currency symbol in front, e.g. `"S/ 21.00"`.
pub fn format_price(symbol: &str, cents: i64) -> String {
  if symbol.is_empty() {
    format_cents(cents)
  } else {
    format!("{} {}", symbol, format_cents(cents))
  }
}
