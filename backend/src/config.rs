use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_PROTECTED_ROUTES: &str = "/dashboard(.*)";
pub const DEFAULT_SESSION_COOKIE: &str = "__session";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub frontend_dir: String,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub guard: GuardConfig,
}

/// Route guard settings.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    pub enabled: bool,
    pub protected_routes: Vec<String>,
    pub session_cookie_name: String,
    pub session_secret: Option<String>,
    pub sign_in_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment
    /// in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let enabled = match lookup("AUTH_GUARD_ENABLED") {
            Some(value) => parse_flag(&value).context("AUTH_GUARD_ENABLED must be a boolean")?,
            None => true,
        };

        let protected_routes = split_list(
            &lookup("PROTECTED_ROUTES").unwrap_or_else(|| DEFAULT_PROTECTED_ROUTES.to_string()),
        );

        let session_secret = lookup("SESSION_SECRET").filter(|s| !s.is_empty());
        if enabled && session_secret.is_none() {
            bail!("SESSION_SECRET must be set when AUTH_GUARD_ENABLED is on");
        }

        Ok(Self {
            port,
            frontend_dir: lookup("FRONTEND_DIR").unwrap_or_else(|| "frontend/dist".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").map(|s| split_list(&s)),
            guard: GuardConfig {
                enabled,
                protected_routes,
                session_cookie_name: lookup("SESSION_COOKIE_NAME")
                    .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
                session_secret,
                sign_in_url: lookup("SIGN_IN_URL").unwrap_or_else(|| "/login".to_string()),
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value {:?}", other),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
