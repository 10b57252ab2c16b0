use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Deadline for one outbound generation call. Unset means no deadline.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    // Never read from or written to the config file.
    #[serde(skip)]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LlmConfig {
    /// Attaches the credential, rejecting a missing or empty value.
    pub fn with_api_key(mut self, api_key: Option<String>) -> crate::Result<Self> {
        match api_key {
            Some(key) if !key.is_empty() => {
                self.api_key = key;
                Ok(self)
            }
            _ => Err(crate::Error::config(format!(
                "API key not found: set the {} environment variable",
                self.api_key_env
            ))),
        }
    }

    /// Reads the credential from the environment variable named by `api_key_env`.
    pub fn with_api_key_from_env(self) -> crate::Result<Self> {
        let key = std::env::var(&self.api_key_env).ok();
        self.with_api_key(key)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: None,
            api_key: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            env_file: default_env_file(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_env_file() -> String {
    ".env".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
