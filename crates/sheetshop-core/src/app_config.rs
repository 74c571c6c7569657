use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Startup configuration, passed explicitly to the loader, renderer and
/// server. Nothing in the workspace reads these values from globals.
#[derive(Clone)]
pub struct AppConfig {
    /// Published spreadsheet CSV export URL.
    pub sheet_csv_url: String,
    /// Path or URL prefix under which `{id}.jpg` product images live.
    pub image_base: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Heading and `<title>` of the storefront page.
    pub store_title: String,
    /// Cron expression for periodic catalog reloads; `None` loads once.
    pub refresh_cron: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The published sheet URL is an unguessable capability link.
        f.debug_struct("AppConfig")
            .field("sheet_csv_url", &"[redacted]")
            .field("image_base", &self.image_base)
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("store_title", &self.store_title)
            .field("refresh_cron", &self.refresh_cron)
            .finish()
    }
}
