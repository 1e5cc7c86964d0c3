use serde::{Deserialize, Serialize};

use ledgerctl_core::Period;

/// A per-period currency exchange rate against the book currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency: String,
    pub period: Period,
    pub rate: f64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Input for setting a rate. Upserts on (currency, period).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetExchangeRate {
    pub currency: String,
    pub period: Period,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rate_payload() {
        let rate: ExchangeRate = serde_json::from_str(
            r#"{"currency": "USD", "period": "2026-07", "rate": 7.12}"#,
        )
        .unwrap();
        assert_eq!(rate.currency, "USD");
        assert_eq!(rate.period.to_string(), "2026-07");
        assert!((rate.rate - 7.12).abs() < f64::EPSILON);
    }
}
