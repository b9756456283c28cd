use anyhow::{bail, Result};
use predict::{derive_view, AppShell, PredictionController, RequestState, ResultView};
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::DateArgs;
use crate::upstream::UpstreamClient;

/// Runs one submission through the same shell the web page uses and prints
/// the result panel as text.
pub async fn predict(args: &DateArgs, api_url: &str, request_timeout_secs: u64) -> Result<()> {
    let client = UpstreamClient::new(api_url, Duration::from_secs(request_timeout_secs))?;
    info!("Requesting forecast from {}", client.base_url());

    let controller = PredictionController::new(client);
    let mut shell = AppShell::new();
    let state = shell
        .submit(args.selection(), args.today(), &controller)
        .await
        .clone();

    match state {
        RequestState::Succeeded(response) => {
            let view = derive_view(&response)?;
            print!("{}", render(&view));
            Ok(())
        }
        RequestState::Failed(message) => bail!("{}", message),
        other => {
            debug!("Unexpected final state: {:?}", other);
            bail!("prediction did not settle")
        }
    }
}

fn render(view: &ResultView) -> String {
    let mut out = String::new();
    out.push_str("Hasil Prediksi\n");
    out.push_str(&format!("  Harga Terakhir   : {} (per {})\n", view.last_price, view.last_data_date));
    out.push_str(&format!("  Prediksi Harga   : {} (target {})\n", view.predicted_price, view.target_date));
    out.push_str(&format!("  Perubahan        : {} ({})\n", view.change_label(), view.trend_label()));
    out.push_str(&format!("  Rentang Prediksi : {} sampai {}\n", view.confidence_lower, view.confidence_upper));
    out.push('\n');
    out.push_str(&view.headline());
    out.push('\n');
    out.push_str(&view.band_summary());
    out.push('\n');
    if !view.has_chart {
        out.push_str("(grafik tidak tersedia)\n");
    }
    out
}
