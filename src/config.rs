use std::env::var;

use dotenvy::dotenv;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, &'static str> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            port,
            scheme: lookup("SCHEME").unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            database_url: lookup("DATABASE_URL")
                .ok_or("An error occured while getting DATABASE_URL env param")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, &'static str> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = parse(&[("DATABASE_URL", "postgres://localhost/users")]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.scheme, "http");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.server_url(), "http://0.0.0.0:8000");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = parse(&[
            ("DATABASE_URL", "postgres://db/users"),
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("SCHEME", "https"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.server_url(), "https://127.0.0.1:9090");
        assert_eq!(config.database_url, "postgres://db/users");
    }

    #[test]
    fn database_url_is_required() {
        assert!(parse(&[("PORT", "8000")]).is_err());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = parse(&[("DATABASE_URL", "postgres://db/users"), ("PORT", "eighty")]);
        assert_eq!(result, Err("An error occured while parsing PORT env param"));
    }
}
