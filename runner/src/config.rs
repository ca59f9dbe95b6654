use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,

    // Data
    pub csv_path: String,
    pub strict_headers: bool,

    // Target
    pub base_url: String,

    // Browser
    pub webdriver_url: String,
    pub headless: bool,

    // Timeouts
    pub text_timeout_ms: u64,
    pub value_timeout_ms: u64,
    pub login_settle_ms: u64,
    pub submit_settle_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            csv_path: "./ddt/ddt_5iterations.csv".to_string(),
            strict_headers: false,
            base_url: "https://www.theautomationchallenge.com/".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            text_timeout_ms: 1000,
            value_timeout_ms: 500,
            login_settle_ms: 3000,
            submit_settle_ms: 0,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Reads `.env` and the process environment; missing or unparsable values keep their default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        Config {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            csv_path: env::var("CSV_PATH").unwrap_or(defaults.csv_path),
            strict_headers: env_parse("CSV_STRICT_HEADERS", defaults.strict_headers),

            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),

            webdriver_url: env::var("WEBDRIVER_URL").unwrap_or(defaults.webdriver_url),
            headless: env_parse("HEADLESS", defaults.headless),

            text_timeout_ms: env_parse("TEXT_TIMEOUT_MS", defaults.text_timeout_ms),
            value_timeout_ms: env_parse("VALUE_TIMEOUT_MS", defaults.value_timeout_ms),
            login_settle_ms: env_parse("LOGIN_SETTLE_MS", defaults.login_settle_ms),
            submit_settle_ms: env_parse("SUBMIT_SETTLE_MS", defaults.submit_settle_ms),
        }
    }
}
