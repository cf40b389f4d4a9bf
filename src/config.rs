// src/config.rs
use crate::errors::DesignError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Reads `DESIGN_HOST`, `DESIGN_PORT` and `DESIGN_WORKERS`.
    pub fn from_env() -> Result<Self, DesignError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DesignError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("DESIGN_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "DESIGN_PORT")?.unwrap_or(defaults.port),
            workers: parse_var(&lookup, "DESIGN_WORKERS")?,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, DesignError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| DesignError::Config(format!("{} has invalid value '{}'", key, raw)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), ("0.0.0.0".to_string(), 8080));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DESIGN_HOST", "127.0.0.1"),
            ("DESIGN_PORT", "9000"),
            ("DESIGN_WORKERS", "4"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.workers, Some(4));
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("DESIGN_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, DesignError::Config(msg) if msg.contains("DESIGN_PORT")));
    }
}
