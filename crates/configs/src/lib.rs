use std::net::{SocketAddr, ToSocketAddrs};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// Bind and asset settings for the posts API service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

/// Bind, asset and upstream settings for the HTML frontend service.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_frontend_port")]
    pub port: u16,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_api_port() -> u16 { 4000 }
fn default_frontend_port() -> u16 { 3000 }
fn default_api_url() -> String { "http://localhost:4000".into() }
fn default_public_dir() -> String { "public".into() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_api_port(),
            public_dir: default_public_dir(),
            worker_threads: None,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_frontend_port(),
            api_url: default_api_url(),
            public_dir: default_public_dir(),
            worker_threads: None,
        }
    }
}

/// Load `CONFIG_PATH` (default `config.toml`). A missing file is not an
/// error and yields the defaults; a malformed one is.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    match std::fs::read_to_string(&path) {
        Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e).with_context(|| format!("cannot read config file {path}")),
    }
}

fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// File config for the API service with process env overrides applied.
pub fn load_api_config() -> Result<ApiConfig> {
    let mut cfg = load_default()?.api;
    cfg.apply_env(process_env);
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// File config for the frontend service with process env overrides applied.
pub fn load_frontend_config() -> Result<FrontendConfig> {
    let mut cfg = load_default()?.frontend;
    cfg.apply_env(process_env);
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| anyhow!("PORT must be an integer in 1..=65535, got {raw:?}"))
}

fn parse_threads(raw: Option<String>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
}

/// Host names such as `localhost` are resolved; the first address wins.
fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve bind host {host}"))?
        .next()
        .ok_or_else(|| anyhow!("bind host {host} resolved to no address"))
}

fn normalize_threads(threads: &mut Option<usize>) {
    if *threads == Some(0) {
        *threads = None;
    }
}

impl ApiConfig {
    /// Overrides: `HOST`, `PORT`, `PUBLIC_DIR`, `TOKIO_WORKER_THREADS`.
    /// An unparsable `PORT` is kept as port 0 so validation reports it.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_port(&port).unwrap_or(0);
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            self.public_dir = dir;
        }
        if let Some(w) = parse_threads(lookup("TOKIO_WORKER_THREADS")) {
            self.worker_threads = Some(w);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("api.port must be in 1..=65535"));
        }
        if self.public_dir.trim().is_empty() {
            self.public_dir = default_public_dir();
        }
        normalize_threads(&mut self.worker_threads);
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        bind_addr(&self.host, self.port)
    }
}

impl FrontendConfig {
    /// Overrides: `HOST`, `PORT`, `API_URL`, `PUBLIC_DIR`, `TOKIO_WORKER_THREADS`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_port(&port).unwrap_or(0);
        }
        if let Some(url) = lookup("API_URL") {
            self.api_url = url;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            self.public_dir = dir;
        }
        if let Some(w) = parse_threads(lookup("TOKIO_WORKER_THREADS")) {
            self.worker_threads = Some(w);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("frontend.port must be in 1..=65535"));
        }
        let url = self.api_url.trim().trim_end_matches('/');
        if url.is_empty() {
            self.api_url = default_api_url();
        } else {
            let lower = url.to_lowercase();
            if !(lower.starts_with("http://") || lower.starts_with("https://")) {
                return Err(anyhow!("frontend.api_url must start with http:// or https://"));
            }
            self.api_url = url.to_string();
        }
        if self.public_dir.trim().is_empty() {
            self.public_dir = default_public_dir();
        }
        normalize_threads(&mut self.worker_threads);
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        bind_addr(&self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn default_ports_and_api_url() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api.port, 4000);
        assert_eq!(cfg.frontend.port, 3000);
        assert_eq!(cfg.frontend.api_url, "http://localhost:4000");
        assert_eq!(cfg.api.public_dir, "public");
    }

    #[test]
    fn partial_toml_fills_defaults() -> Result<()> {
        let cfg = parse(
            r#"
            [api]
            port = 5000

            [frontend]
            api_url = "http://api.internal:5000"
            "#,
        )?;
        assert_eq!(cfg.api.port, 5000);
        assert_eq!(cfg.api.host, "0.0.0.0");
        assert_eq!(cfg.frontend.port, 3000);
        assert_eq!(cfg.frontend.api_url, "http://api.internal:5000");
        Ok(())
    }

    #[test]
    fn env_overrides_file_values() -> Result<()> {
        let mut cfg = FrontendConfig::default();
        cfg.apply_env(lookup(&[("PORT", "8080"), ("API_URL", "https://example.com/")]));
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_url, "https://example.com");
        Ok(())
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut cfg = ApiConfig::default();
        cfg.apply_env(lookup(&[("PORT", "not-a-port")]));
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn api_url_scheme_is_checked() {
        let mut cfg = FrontendConfig::default();
        cfg.apply_env(lookup(&[("API_URL", "ftp://localhost:4000")]));
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn zero_worker_threads_means_runtime_default() -> Result<()> {
        let mut cfg = ApiConfig::default();
        cfg.apply_env(lookup(&[("TOKIO_WORKER_THREADS", "0")]));
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.worker_threads, None);
        Ok(())
    }

    #[test]
    fn bind_addr_parses() -> Result<()> {
        let mut cfg = ApiConfig::default();
        cfg.host = "127.0.0.1".into();
        assert_eq!(cfg.bind_addr()?.port(), 4000);
        Ok(())
    }

    #[test]
    fn host_names_are_resolved() -> Result<()> {
        let mut cfg = FrontendConfig::default();
        cfg.apply_env(lookup(&[("HOST", "localhost")]));
        cfg.normalize_and_validate()?;
        let addr = cfg.bind_addr()?;
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3000);
        Ok(())
    }

    #[test]
    fn unresolvable_host_is_an_error() {
        let mut cfg = ApiConfig::default();
        cfg.host = "not a host".into();
        assert!(cfg.bind_addr().is_err());
    }
}
