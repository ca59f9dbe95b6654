use clap::Parser;
use formfill_runner::browser::{create_webdriver_client, WebDriverPage};
use formfill_runner::config::Config;
use formfill_runner::errors::RunError;
use formfill_runner::form::{load_rows, FormRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fills the challenge form once per CSV row, locating inputs by label proximity.
#[derive(Debug, Parser)]
#[command(name = "formfill-runner", version)]
struct Args {
    /// CSV data file (header row is skipped)
    #[arg(long)]
    csv: Option<String>,

    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    webdriver_url: Option<String>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Reject a CSV whose headers do not match the expected columns
    #[arg(long)]
    strict_headers: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(csv) = self.csv {
            config.csv_path = csv;
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(url) = self.webdriver_url {
            config.webdriver_url = url;
        }
        if self.headed {
            config.headless = false;
        }
        if self.strict_headers {
            config.strict_headers = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env();
    Args::parse().apply(&mut config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},formfill_runner=debug", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 formfill-runner starting");
    tracing::info!("   CSV: {}", config.csv_path);
    tracing::info!("   Target: {}", config.base_url);
    tracing::info!("   WebDriver URL: {}", config.webdriver_url);
    tracing::info!("   Headless: {}", config.headless);

    let rows = load_rows(&config.csv_path, config.strict_headers)?;

    let client = create_webdriver_client(&config)
        .await
        .map_err(RunError::from)?;
    let page = WebDriverPage::new(client);

    let result = FormRunner::new(&page, &config).run(&rows).await;

    if let Err(e) = page.close().await {
        tracing::warn!("⚠️ Closing the WebDriver session failed: {}", e);
    }

    let report = result?;
    tracing::info!(
        "🏁 Done: {} rows submitted, {} fields unresolved",
        report.rows.len(),
        report.total_unresolved()
    );

    Ok(())
}
