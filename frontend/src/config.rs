//! 构建期配置
//!
//! 后端地址在构建时通过环境变量注入 (例如 `PROPERTYMATCH_API_URL=... trunk build`)。

use std::str::FromStr;
use tracing::Level;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8009";
const DEFAULT_AUTH_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 匹配服务 (`/scrape_and_match`)
    pub api_base_url: String,
    /// 认证与管理服务 (`/auth/*`, `/admin/*`)
    pub auth_api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("PROPERTYMATCH_API_URL"),
            option_env!("PROPERTYMATCH_AUTH_API_URL"),
            option_env!("PROPERTYMATCH_LOG"),
        )
    }

    /// 认证服务未单独配置时沿用匹配服务地址，两者都缺省时各自使用本地默认端口
    fn resolve(api: Option<&str>, auth_api: Option<&str>, log: Option<&str>) -> Self {
        let api = non_blank(api);
        let auth_api = non_blank(auth_api);

        Self {
            api_base_url: normalize(api.unwrap_or(DEFAULT_API_URL)),
            auth_api_base_url: normalize(auth_api.or(api).unwrap_or(DEFAULT_AUTH_API_URL)),
            log_level: non_blank(log)
                .and_then(|l| Level::from_str(l).ok())
                .unwrap_or(Level::INFO),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.api_base_url, "http://127.0.0.1:8009");
        assert_eq!(config.auth_api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_auth_falls_back_to_api_url() {
        let config = AppConfig::resolve(Some("https://api.example.com/"), None, None);
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.auth_api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_explicit_auth_url_wins() {
        let config = AppConfig::resolve(
            Some("https://api.example.com"),
            Some("https://auth.example.com//"),
            Some("debug"),
        );
        assert_eq!(config.auth_api_base_url, "https://auth.example.com");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = AppConfig::resolve(Some("  "), Some(""), Some("loud"));
        assert_eq!(config.api_base_url, "http://127.0.0.1:8009");
        assert_eq!(config.auth_api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.log_level, Level::INFO);
    }
}
