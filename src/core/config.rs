use std::env;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_token: String,
    pub brave_api_key: String,
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub bind_address: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            telegram_token: env::var("TELEGRAM_TOKEN")
                .map_err(|e| format!("TELEGRAM_TOKEN: {}", e))?,
            brave_api_key: env::var("BRAVE_API_KEY")
                .map_err(|e| format!("BRAVE_API_KEY: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL").ok(),
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
