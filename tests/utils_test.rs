use enphase_proxy::types::{EnergyTotals, Summary};
use enphase_proxy::utils::*;

// Helper function to create a test summary with distinct magnitudes
fn create_test_summary() -> Summary {
    Summary {
        production: EnergyTotals {
            today: 5_200.0,
            month: 152_000.0,
            year: 1_350_000.0,
            lifetime: 12_800_000.0,
        },
        consumption: EnergyTotals {
            today: 0.0,
            month: 0.0,
            year: 0.0,
            lifetime: 0.0,
        },
    }
}

#[test]
fn test_format_energy() {
    // Values below one kilowatt-hour stay in watt-hours
    assert_eq!(format_energy(0.0), "0 Wh");
    assert_eq!(format_energy(532.0), "532 Wh");

    // Kilowatt-hour range uses one decimal place
    assert_eq!(format_energy(5_200.0), "5.2 kWh");
    assert_eq!(format_energy(152_000.0), "152.0 kWh");

    // Megawatt-hour range uses two decimal places
    assert_eq!(format_energy(1_350_000.0), "1.35 MWh");
    assert_eq!(format_energy(12_800_000.0), "12.80 MWh");
}

#[test]
fn test_format_expiry() {
    // An expiry in the past (or right now) reads as expired
    assert_eq!(format_expiry(100, 100), "expired");
    assert_eq!(format_expiry(100, 200), "expired");

    // Less than a minute remaining is shown in seconds
    assert_eq!(format_expiry(130, 100), "expires in 30s");

    // Less than an hour remaining is shown as minutes and seconds
    assert_eq!(format_expiry(190, 100), "expires in 1m 30s");

    // Longer lifetimes are shown as hours and minutes
    assert_eq!(format_expiry(100 + 7_380, 100), "expires in 2h 3m");
}

#[test]
fn test_truncate_secret() {
    // Short secrets are fully masked
    assert_eq!(truncate_secret("short"), "********");
    assert_eq!(truncate_secret("12345678"), "********");

    // Longer secrets keep only the first and last four characters
    assert_eq!(truncate_secret("abcdefghijkl"), "abcd…ijkl");

    // The original value never appears in the output
    let secret = "super-secret-refresh-token";
    assert!(!truncate_secret(secret).contains("secret"));
}

#[test]
fn test_summary_table_rows() {
    let summary = create_test_summary();
    let rows = summary_table_rows(&summary);

    // One row per period, in reporting order
    assert_eq!(rows.len(), 4);
    let periods: Vec<&str> = rows.iter().map(|r| r.period.as_str()).collect();
    assert_eq!(periods, vec!["today", "month", "year", "lifetime"]);

    // Production values are humanized per magnitude
    assert_eq!(rows[0].production, "5.2 kWh");
    assert_eq!(rows[3].production, "12.80 MWh");

    // Absent consumption metering renders as zero watt-hours
    assert!(rows.iter().all(|r| r.consumption == "0 Wh"));
}
