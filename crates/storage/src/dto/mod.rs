pub mod leaderboard;
pub mod score;
pub mod standings;

pub(crate) fn decimal_to_f64(decimal: rust_decimal::Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}
