//! Frontend configuration module
//!
//! Link targets baked into the bundle at compile time.

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Where the "Log in" link on the sign-up page points
    pub login_url: String,
    /// Terms of Service document
    pub terms_url: String,
    /// Privacy Policy document
    pub privacy_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            login_url: option_env!("CODEASTRA_LOGIN_URL")
                .unwrap_or("/login")
                .to_string(),
            terms_url: option_env!("CODEASTRA_TERMS_URL")
                .unwrap_or("/terms")
                .to_string(),
            privacy_url: option_env!("CODEASTRA_PRIVACY_URL")
                .unwrap_or("/privacy")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn terms_url(&self) -> &str {
        &self.terms_url
    }

    pub fn privacy_url(&self) -> &str {
        &self.privacy_url
    }
}
