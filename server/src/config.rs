use anyhow::{Context, Result, anyhow};

const DEFAULT_PAGE_SIZE: i64 = 25;
const DEFAULT_RAISE_PERCENT: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    pub default_page_size: i64,
    pub default_raise_percent: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: Vec::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_raise_percent: DEFAULT_RAISE_PERCENT,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("invalid DEFAULT_PAGE_SIZE")?,
            None => DEFAULT_PAGE_SIZE,
        };
        if default_page_size < 1 {
            return Err(anyhow!("DEFAULT_PAGE_SIZE must be positive"));
        }

        let default_raise_percent = match lookup("DEFAULT_RAISE_PERCENT") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .context("invalid DEFAULT_RAISE_PERCENT")?,
            None => DEFAULT_RAISE_PERCENT,
        };
        if !default_raise_percent.is_finite() || default_raise_percent <= -100.0 {
            return Err(anyhow!("DEFAULT_RAISE_PERCENT must be greater than -100"));
        }

        Ok(Self {
            cors_allowed_origins,
            default_page_size,
            default_raise_percent,
        })
    }
}
