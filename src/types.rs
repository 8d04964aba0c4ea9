use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemSummaryResponse {
    pub production: Option<EnergyTotalsResponse>,
    pub consumption: Option<EnergyTotalsResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnergyTotalsResponse {
    pub today: Option<f64>,
    pub month_to_date: Option<f64>,
    pub year_to_date: Option<f64>,
    pub lifetime: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub production: EnergyTotals,
    pub consumption: EnergyTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTotals {
    pub today: f64,
    pub month: f64,
    pub year: f64,
    pub lifetime: f64,
}

impl From<EnergyTotalsResponse> for EnergyTotals {
    fn from(raw: EnergyTotalsResponse) -> Self {
        EnergyTotals {
            today: raw.today.unwrap_or(0.0),
            month: raw.month_to_date.unwrap_or(0.0),
            year: raw.year_to_date.unwrap_or(0.0),
            lifetime: raw.lifetime.unwrap_or(0.0),
        }
    }
}

impl From<SystemSummaryResponse> for Summary {
    // Missing upstream fields or sections become zeros in the output shape.
    fn from(raw: SystemSummaryResponse) -> Self {
        Summary {
            production: raw.production.unwrap_or_default().into(),
            consumption: raw.consumption.unwrap_or_default().into(),
        }
    }
}

#[derive(Tabled)]
pub struct SummaryTableRow {
    pub period: String,
    pub production: String,
    pub consumption: String,
}
