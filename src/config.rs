use crate::error::EngineError;

/// Environment variable holding the registry capacity (`0` or unset means unlimited).
pub const MAX_MATCHES_VAR: &str = "CHECKERS_MAX_MATCHES";

/// Registry configuration (pure Rust, optionally read from the environment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of live matches; `None` means unlimited.
    pub max_matches: Option<usize>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_matches(mut self, limit: Option<usize>) -> Self {
        self.max_matches = limit;
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup` (a stand-in for the environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let mut cfg = Self::new();
        if let Some(raw) = lookup(MAX_MATCHES_VAR) {
            let n: usize = raw.trim().parse().map_err(|_| EngineError::InvalidConfig {
                key: MAX_MATCHES_VAR,
                value: raw.clone(),
            })?;
            cfg.max_matches = (n > 0).then_some(n);
        }
        Ok(cfg)
    }
}
