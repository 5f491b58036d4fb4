use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub slack_webhook_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            supabase_url: env::var("SUPABASE_URL")
                .map_err(|e| format!("SUPABASE_URL: {}", e))?,
            supabase_key: env::var("SUPABASE_ANON_KEY")
                .map_err(|e| format!("SUPABASE_ANON_KEY: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL").ok(),
            slack_webhook_url: env::var("SLACK_WEBHOOK_URL")
                .map_err(|e| format!("SLACK_WEBHOOK_URL: {}", e))?,
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
                Err(_) => 4000,
            },
        })
    }
}
