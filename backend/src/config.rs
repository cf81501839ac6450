//! Server settings.
//!
//! Everything is a built-in default: the tool runs locally for one user, opens
//! its own browser tab and keeps nothing on disk. Only `RUST_LOG` is read from
//! the environment, by `env_logger`.

/// Runtime settings shared with the handlers as `web::Data<AppConfig>`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted upload, and largest JSON body, in bytes.
    pub max_upload_bytes: usize,
    /// Open the default browser on the app URL once the server is up.
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024, // 10 MB
            open_browser: true,
        }
    }
}

impl AppConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
