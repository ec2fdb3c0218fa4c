//! Build-time configuration for the web client.

/// Where the story API lives. Defaults to a same-origin `/api` prefix so the
/// bundle works behind a reverse proxy without any configuration; set
/// `STORYDECK_API_URL` at build time to point somewhere else.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    api_base_url: String,
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("STORYDECK_API_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::new()
    }
}
