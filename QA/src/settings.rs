use std::env;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MODEL_ID: &str = "t5-small";
pub const DEFAULT_MODEL_REVISION: &str = "main";
pub const DEFAULT_MAX_NEW_TOKENS: usize = 150;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub static_dir: String,
    pub model: ModelSettings,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub model_id: String,
    pub revision: String,
    /// Upper bound on the decoded sequence length, decoder start token included.
    pub max_new_tokens: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            model: ModelSettings::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: DEFAULT_MODEL_REVISION.to_string(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

impl Settings {
    /// Reads overrides from the environment (and `.env`, if present).
    /// Anything unset keeps its built-in default.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("QA_BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("QA_STATIC_DIR").unwrap_or(defaults.static_dir),
            model: ModelSettings {
                model_id: lookup("QA_MODEL_ID").unwrap_or(defaults.model.model_id),
                revision: lookup("QA_MODEL_REVISION").unwrap_or(defaults.model.revision),
                max_new_tokens: parse_or(
                    &lookup,
                    "QA_MAX_NEW_TOKENS",
                    defaults.model.max_new_tokens,
                ),
            },
            max_upload_bytes: parse_or(&lookup, "QA_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
