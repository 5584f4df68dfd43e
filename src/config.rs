use anyhow::Context;

/// Runtime settings, gathered once at startup from the environment (dotenv
/// loads a .env file first). Admin credentials and the notification
/// recipient live here rather than in code.
#[derive(Clone)]
pub struct Settings {
    pub bind: String,
    pub base_url: String,
    pub smtp_from: String,
    pub admin_email: String,
    pub admin_username: String,
    pub admin_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind: env_or("BIND", "127.0.0.1:8080"),
            base_url: env_or("BASE_URL", "http://localhost:8080"),
            smtp_from: std::env::var("SMTP_FROM").context("SMTP_FROM not found")?,
            admin_email: std::env::var("ADMIN_EMAIL").context("ADMIN_EMAIL not found")?,
            admin_username: std::env::var("ADMIN_USERNAME").context("ADMIN_USERNAME not found")?,
            admin_password: std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD not found")?,
            smtp_host: env_or("SMTP_HOST", "localhost"),
            smtp_port: env_or("SMTP_PORT", "25")
                .parse()
                .context("SMTP_PORT is not a number")?,
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
