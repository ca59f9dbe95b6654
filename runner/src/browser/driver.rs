use crate::config::Config;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

/// Chrome switches for the automation session.
pub fn chrome_args(config: &Config) -> Vec<String> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--window-size=1920,1080".to_string(),
        "--disable-infobars".to_string(),
    ];

    if config.headless {
        args.push("--headless=new".to_string());
    }

    args
}

pub async fn create_webdriver_client(
    config: &Config,
) -> Result<Client, fantoccini::error::NewSessionError> {
    let mut caps = serde_json::Map::new();

    let mut chrome_opts = serde_json::Map::new();
    chrome_opts.insert("args".to_string(), json!(chrome_args(config)));
    chrome_opts.insert("excludeSwitches".to_string(), json!(["enable-automation"]));

    let mut prefs = serde_json::Map::new();
    prefs.insert("credentials_enable_service".to_string(), json!(false));
    prefs.insert("profile.password_manager_enabled".to_string(), json!(false));
    chrome_opts.insert("prefs".to_string(), json!(prefs));

    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
    caps.insert("browserName".to_string(), json!("chrome"));

    tracing::info!("🔌 Connecting to WebDriver: {}", config.webdriver_url);

    let client = ClientBuilder::native()
        .capabilities(caps)
        .connect(&config.webdriver_url)
        .await?;

    tracing::info!("✅ WebDriver session ready");

    Ok(client)
}
