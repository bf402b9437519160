use anyhow::{anyhow, Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// Characters left as-is inside the userinfo part of a connection string.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Record store service settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub mongo_username: Option<String>,
    pub mongo_password: Option<String>,
    pub mongo_host: String,
    pub mongo_port: u16,
    pub mongo_database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            mongo_username: None,
            mongo_password: None,
            mongo_host: "localhost".into(),
            mongo_port: 27017,
            mongo_database: "petshelter".into(),
        }
    }
}

/// Gateway service settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub static_dir: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            backend_url: "http://localhost:5000".into(),
            static_dir: "public".into(),
        }
    }
}

/// Load the optional TOML file named by `CONFIG_PATH` (default `config.toml`).
/// A missing file yields the defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if std::fs::metadata(&path).is_err() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("parsing {path}"))?;
    Ok(cfg)
}

/// Reads a variable, treating empty values as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| anyhow!("{key} must be a port number, got {raw:?}: {e}"))
}

impl StoreConfig {
    /// Record store settings: file section, then process environment.
    pub fn load() -> Result<Self> {
        let mut cfg = load_default()?.store;
        cfg.apply_env_with(&|key: &str| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env_with(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = non_empty(lookup, "HOST") {
            self.host = v;
        }
        if let Some(v) = non_empty(lookup, "PORT") {
            self.port = parse_port("PORT", &v)?;
        }
        if let Some(v) = non_empty(lookup, "MONGO_USERNAME") {
            self.mongo_username = Some(v);
        }
        if let Some(v) = non_empty(lookup, "MONGO_PASSWORD") {
            self.mongo_password = Some(v);
        }
        if let Some(v) = non_empty(lookup, "MONGO_HOST") {
            self.mongo_host = v;
        }
        if let Some(v) = non_empty(lookup, "MONGO_PORT") {
            self.mongo_port = parse_port("MONGO_PORT", &v)?;
        }
        if let Some(v) = non_empty(lookup, "MONGO_DATABASE") {
            self.mongo_database = v;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("store port must be in 1..=65535"));
        }
        if self.mongo_port == 0 {
            return Err(anyhow!("MONGO_PORT must be in 1..=65535"));
        }
        if self.mongo_host.trim().is_empty() {
            return Err(anyhow!("MONGO_HOST must not be empty"));
        }
        if self.mongo_database.trim().is_empty() {
            return Err(anyhow!("MONGO_DATABASE must not be empty"));
        }
        Ok(())
    }

    /// Username and password, only when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let user = self.mongo_username.as_deref().filter(|u| !u.is_empty())?;
        let pass = self.mongo_password.as_deref().filter(|p| !p.is_empty())?;
        Some((user, pass))
    }

    /// Connection string for the document database. With credentials, the
    /// admin database is the authentication source.
    pub fn mongo_url(&self) -> String {
        self.build_url(false)
    }

    /// Same as [`StoreConfig::mongo_url`] with the password masked, for logs.
    pub fn redacted_mongo_url(&self) -> String {
        self.build_url(true)
    }

    fn build_url(&self, redact: bool) -> String {
        let target = format!("{}:{}/{}", self.mongo_host, self.mongo_port, self.mongo_database);
        match self.credentials() {
            Some((user, pass)) => {
                let pass = if redact {
                    "****".to_string()
                } else {
                    utf8_percent_encode(pass, USERINFO).to_string()
                };
                format!(
                    "mongodb://{}:{}@{}?authSource=admin",
                    utf8_percent_encode(user, USERINFO),
                    pass,
                    target
                )
            }
            None => format!("mongodb://{target}"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GatewayConfig {
    /// Gateway settings: file section, then process environment.
    pub fn load() -> Result<Self> {
        let mut cfg = load_default()?.gateway;
        cfg.apply_env_with(&|key: &str| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env_with(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = non_empty(lookup, "HOST") {
            self.host = v;
        }
        if let Some(v) = non_empty(lookup, "PORT") {
            self.port = parse_port("PORT", &v)?;
        }
        if let Some(v) = non_empty(lookup, "BACKEND_URL") {
            self.backend_url = v;
        }
        if let Some(v) = non_empty(lookup, "STATIC_DIR") {
            self.static_dir = v;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("gateway port must be in 1..=65535"));
        }
        let trimmed = self.backend_url.trim().trim_end_matches('/');
        let lower = trimmed.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("BACKEND_URL must start with http:// or https://"));
        }
        self.backend_url = trimmed.to_string();
        if self.static_dir.trim().is_empty() {
            self.static_dir = "public".to_string();
        }
        Ok(())
    }

    /// Collection endpoint on the record store.
    pub fn pets_url(&self) -> String {
        format!("{}/api/pets", self.backend_url.trim_end_matches('/'))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
