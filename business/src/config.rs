use std::any::Any;

use staffdesk_states::State;

/// Where the employees backend lives.
///
/// Registered in `StateCtx` at startup; tests replace it with a config
/// pointing at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base_url: String,
}

impl AdminConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn api_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        let base_url = std::env::var("STAFFDESK_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned());
        Self {
            api_base_url: base_url,
        }
    }
}

impl State for AdminConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
