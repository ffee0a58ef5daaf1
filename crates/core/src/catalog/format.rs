/// Format a price with a currency prefix, e.g. `$109.95`, `$10`, `$22.3`.
///
/// Uses the shortest decimal that round-trips, so whole prices carry no
/// trailing `.0`.
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{currency}{price}")
}
