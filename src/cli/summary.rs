use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{Res, config, enphase, error, management::TokenManager, types::Summary, utils};

/// Fetches the system summary once and prints it as a table.
///
/// Runs the same credential check and upstream fetch as the HTTP handler,
/// but renders the normalized result for a terminal instead of serializing
/// it to JSON. Failures terminate with an error message.
pub async fn summary() {
    let mut token_mgr = TokenManager::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching system summary...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = fetch_once(&mut token_mgr).await;
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            let table = Table::new(utils::summary_table_rows(&summary));
            println!("{}", table);
        }
        Err(e) => error!("Failed to fetch summary: {}", e),
    }
}

async fn fetch_once(token_mgr: &mut TokenManager) -> Res<Summary> {
    token_mgr.ensure_valid().await?;

    let raw = enphase::summary::fetch_summary(
        &config::enphase_apiurl(),
        token_mgr.access_token(),
        &config::enphase_system_id(),
    )
    .await?;

    Ok(Summary::from(raw))
}
