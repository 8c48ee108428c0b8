//! Runtime configuration, read from environment variables.
//!
//! | Variable                  | Default           |
//! |---------------------------|-------------------|
//! | `HOST`                    | `127.0.0.1`       |
//! | `PORT`                    | `8080`            |
//! | `SERVICE_NAME`            | `POC-Html-to-PDF` |
//! | `WKHTMLTOPDF_BIN`         | `wkhtmltopdf`     |
//! | `PDF_TEMP_DIR`            | OS temp directory |
//! | `PDF_RENDER_TIMEOUT_SECS` | `120` (`0` = off) |
//! | `APP_ENV`                 | `production`      |
//! | `SHOW_DOCS_ALWAYS`        | `true`            |
//! | `JSON_LIMIT_BYTES`        | `10485760`        |

use log::warn;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SERVICE_NAME: &str = "POC-Html-to-PDF";
const DEFAULT_RENDERER: &str = "wkhtmltopdf";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    /// Renderer executable; a bare name is resolved on `PATH`.
    pub renderer_bin: PathBuf,
    /// Directory under which per-render workspaces are created.
    pub temp_root: PathBuf,
    /// Upper bound on one renderer invocation. `None` waits indefinitely.
    pub render_timeout: Option<Duration>,
    pub environment: String,
    pub show_docs_always: bool,
    pub json_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing keys use
    /// the defaults; unparsable values log a warning and use the defaults too.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_or(&lookup, "PDF_RENDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            renderer_bin: lookup("WKHTMLTOPDF_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RENDERER)),
            temp_root: lookup("PDF_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            render_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            environment: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),
            show_docs_always: parse_flag(&lookup, "SHOW_DOCS_ALWAYS", true),
            json_limit: parse_or(&lookup, "JSON_LIMIT_BYTES", DEFAULT_JSON_LIMIT),
        }
    }

    /// API documentation is mounted in development, or everywhere when
    /// `SHOW_DOCS_ALWAYS` is set.
    pub fn docs_enabled(&self) -> bool {
        self.show_docs_always || self.environment.eq_ignore_ascii_case("development")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_name, "POC-Html-to-PDF");
        assert_eq!(config.renderer_bin, PathBuf::from("wkhtmltopdf"));
        assert_eq!(config.temp_root, std::env::temp_dir());
        assert_eq!(config.render_timeout, Some(Duration::from_secs(120)));
        assert_eq!(config.json_limit, 10 * 1024 * 1024);
        assert!(config.docs_enabled());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("WKHTMLTOPDF_BIN", "/opt/wk/bin/wkhtmltopdf"),
            ("PDF_TEMP_DIR", "/var/tmp/pdf"),
            ("PDF_RENDER_TIMEOUT_SECS", "15"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.renderer_bin, PathBuf::from("/opt/wk/bin/wkhtmltopdf"));
        assert_eq!(config.temp_root, PathBuf::from("/var/tmp/pdf"));
        assert_eq!(config.render_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn zero_timeout_disables_the_bound() {
        let config = config_from(&[("PDF_RENDER_TIMEOUT_SECS", "0")]);
        assert_eq!(config.render_timeout, None);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "eighty"), ("JSON_LIMIT_BYTES", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.json_limit, 10 * 1024 * 1024);
    }

    #[test]
    fn docs_follow_environment_when_not_forced() {
        let hidden = config_from(&[("SHOW_DOCS_ALWAYS", "false")]);
        assert!(!hidden.docs_enabled());

        let dev = config_from(&[("SHOW_DOCS_ALWAYS", "off"), ("APP_ENV", "Development")]);
        assert!(dev.docs_enabled());
    }
}
