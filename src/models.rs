use serde::{Deserialize, Serialize};

use tokengen::form::{TokenConfig, TokenForm};

#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub config: TokenConfig,
    pub alphabet_size: usize,
    pub tokens: Vec<String>,
}

impl TokensResponse {
    pub fn new(config: TokenConfig, tokens: Vec<String>) -> Self {
        Self {
            alphabet_size: config.charset().size(),
            config,
            tokens,
        }
    }
}

impl From<&TokenForm> for TokensResponse {
    fn from(form: &TokenForm) -> Self {
        Self::new(*form.config(), form.tokens().to_vec())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CopyRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ClipboardResponse {
    pub contents: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
