use std::collections::HashMap;
use std::env;
use std::fs;

use serde::Deserialize;
use toml::de::Error as TomlError;

use crate::config;

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Contexts {
    pub(crate) contexts: HashMap<String, Config>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Config {
    pub(crate) current: bool,
    #[serde(skip_deserializing)]
    pub(crate) name: String,
    pub(crate) host: String,
    pub(crate) api: config::api::Api,
}

impl Config {
    pub(crate) fn get_api_url(&self) -> String {
        format!("{}://{}:{}", self.api.scheme, self.host, self.api.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            current: true,
            name: "default".to_string(),
            host: "127.0.0.1".to_string(),
            api: config::api::Api {
                scheme: "http".to_string(),
                port: 1323,
            },
        }
    }
}

pub(crate) fn get_config_dir() -> String {
    match env::var_os("FOUNDRY_CONFIG_DIR") {
        Some(variable) => variable.into_string().unwrap(),
        None => format!("{}/.config/foundry", env::var("HOME").unwrap()),
    }
}

pub(crate) fn load_config(context_current: &str) -> Config {
    let home_dir = get_config_dir();

    let file = format!("{}/config.toml", home_dir);

    debug!("load config file {}", file);

    if fs::metadata(file.clone()).is_ok() {
        let contents = fs::read_to_string(file).unwrap();
        let contexts: Result<Contexts, TomlError> = toml::from_str(&contents);

        match contexts {
            Ok(contexts) => {
                if let Some(config) = select_context(contexts, context_current) {
                    return config;
                }
            }
            Err(err) => {
                error!("Error while deserializing the TOML file : {}", err);
            }
        }
    }

    debug!("Switch to default configuration");

    Config::default()
}

fn select_context(contexts: Contexts, context_current: &str) -> Option<Config> {
    for (context_name, mut config) in contexts.contexts {
        config.name = context_name.clone();

        if context_name == context_current {
            debug!("Switch to context {}", context_name);
            return Some(config);
        }

        if context_current.is_empty() && config.current {
            debug!("Switch to current context {}", context_name);
            return Some(config);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTEXTS: &str = r#"
        [contexts.development]
        current = true
        host = "127.0.0.1"

        [contexts.development.api]
        scheme = "http"
        port = 1323

        [contexts.staging]
        current = false
        host = "10.0.0.12"

        [contexts.staging.api]
        scheme = "https"
        port = 8443
    "#;

    #[test]
    fn test_default_config_binds_loopback() {
        let config = Config::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.api.port, 1323);
        assert_eq!(config.get_api_url(), "http://127.0.0.1:1323");
    }

    #[test]
    fn test_select_context_by_name() {
        let contexts: Contexts = toml::from_str(CONTEXTS).unwrap();

        let config = select_context(contexts, "staging").unwrap();

        assert_eq!(config.name, "staging");
        assert_eq!(config.get_api_url(), "https://10.0.0.12:8443");
    }

    #[test]
    fn test_select_context_falls_back_to_current() {
        let contexts: Contexts = toml::from_str(CONTEXTS).unwrap();

        let config = select_context(contexts, "").unwrap();

        assert_eq!(config.name, "development");
    }

    #[test]
    fn test_select_context_unknown_name() {
        let contexts: Contexts = toml::from_str(CONTEXTS).unwrap();

        assert!(select_context(contexts, "production").is_none());
    }
}
