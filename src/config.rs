use log::Level;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Build-time settings for the client.
///
/// `FINANCE_API_BASE` and `FINANCE_LOG` are read with `option_env!`, so they
/// have to be set when the bundle is compiled (e.g. `FINANCE_API_BASE=... trunk build`).
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
    pub currency_symbol: &'static str,
    pub toast_timeout_ms: u32,
    pub login_redirect_ms: u32,
    pub signup_redirect_ms: u32,
    pub logout_redirect_ms: u32,
    pub recent_txn_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
            currency_symbol: "₹",
            toast_timeout_ms: 3000,
            login_redirect_ms: 600,
            signup_redirect_ms: 900,
            logout_redirect_ms: 350,
            recent_txn_limit: 200,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FINANCE_API_BASE"), option_env!("FINANCE_LOG"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }
}
