use crate::types::{Summary, SummaryTableRow};

pub fn format_energy(wh: f64) -> String {
    if wh.abs() < 1_000.0 {
        format!("{:.0} Wh", wh)
    } else if wh.abs() < 1_000_000.0 {
        format!("{:.1} kWh", wh / 1_000.0)
    } else {
        format!("{:.2} MWh", wh / 1_000_000.0)
    }
}

pub fn format_expiry(expires_at: u64, now: u64) -> String {
    if now >= expires_at {
        return "expired".to_string();
    }

    let remaining = expires_at - now;
    if remaining < 60 {
        format!("expires in {}s", remaining)
    } else if remaining < 3600 {
        format!("expires in {}m {}s", remaining / 60, remaining % 60)
    } else {
        format!(
            "expires in {}h {}m",
            remaining / 3600,
            (remaining % 3600) / 60
        )
    }
}

pub fn truncate_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

pub fn summary_table_rows(summary: &Summary) -> Vec<SummaryTableRow> {
    let periods = [
        (
            "today",
            summary.production.today,
            summary.consumption.today,
        ),
        (
            "month",
            summary.production.month,
            summary.consumption.month,
        ),
        ("year", summary.production.year, summary.consumption.year),
        (
            "lifetime",
            summary.production.lifetime,
            summary.consumption.lifetime,
        ),
    ];

    periods
        .into_iter()
        .map(|(period, production, consumption)| SummaryTableRow {
            period: period.to_string(),
            production: format_energy(production),
            consumption: format_energy(consumption),
        })
        .collect()
}
