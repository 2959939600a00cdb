//! HTTP transport layer for FCS API requests

use fcs_core::auth::AuthMethod;
use fcs_core::{Config, Error, Params, Result, SignedToken};
use fcs_models::ApiResponse;
use reqwest::Client;
use serde_json::Value;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the FCS API.
///
/// Owns the credentials, the HTTP handle and the last response slot. One
/// call to [`Transport::execute`] is one POST; there are no retries.
pub struct Transport {
    base_url: Url,
    settings: RwLock<Settings>,
    last_response: Mutex<Option<ApiResponse>>,
}

/// Configuration and the HTTP handle built from it; swapped together
struct Settings {
    client: Client,
    config: Config,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if config.auth_method == AuthMethod::Token && !config.has_documented_token_expiry() {
            warn!(
                "Token expiry of {}s is not one of the documented values {:?}",
                config.token_expiry_secs,
                fcs_core::TOKEN_EXPIRY_PRESETS
            );
        }

        Ok(Self {
            base_url: Self::parse_base_url(&config.base_url)?,
            settings: RwLock::new(Settings { client: Self::build_http_client(&config)?, config }),
            last_response: Mutex::new(None),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        let config = Config::with_access_key("test_key".to_string())
            .with_base_url("https://mock.fcsapi.com/");
        Self {
            base_url: Self::parse_base_url(&config.base_url).unwrap(),
            settings: RwLock::new(Settings { client: Client::new(), config }),
            last_response: Mutex::new(None),
        }
    }

    /// Rebuild the HTTP handle with new timeouts.
    ///
    /// Every endpoint group sharing this transport picks up the change, and
    /// the last response is left untouched.
    pub fn set_timeouts(&self, timeout_secs: u64, connect_timeout_secs: u64) -> Result<()> {
        let config = self.config().with_timeouts(timeout_secs, connect_timeout_secs);
        let client = Self::build_http_client(&config)?;

        debug!("Request timeout {}s, connect timeout {}s", timeout_secs, connect_timeout_secs);
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = Settings { client, config };
        Ok(())
    }

    fn settings(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn build_http_client(config: &Config) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("fcs-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))
    }

    fn parse_base_url(base_url: &str) -> Result<Url> {
        // without the trailing slash Url::join would drop the last segment
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|e| Error::InvalidUrl(format!("Invalid base URL {}: {}", base, e)))
    }

    /// Execute one API call.
    ///
    /// Auth parameters are applied over `params`, so a caller can never
    /// replace the configured credentials. The parsed envelope is returned
    /// and recorded as the last response, including application errors
    /// (`status: false`).
    ///
    /// Network failures, timeouts and unparseable bodies come back as
    /// [`Error::Request`]; the matching synthetic envelope
    /// `{status: false, code: 0, msg: "Request Error: ..."}` is recorded as
    /// the last response. A missing secret is reported as a configuration
    /// error and recorded the same way.
    #[instrument(skip(self, params), fields(auth = %self.auth_method()))]
    pub async fn execute(&self, path: &str, params: Params) -> Result<ApiResponse> {
        let form = match self.build_form(params) {
            Ok(form) => form,
            Err(e) => {
                error!("Cannot authenticate request: {}", e);
                self.store(ApiResponse::request_error(e.to_string()));
                return Err(e);
            }
        };

        let outcome = match self.endpoint_url(path) {
            Ok(url) => self.send(url, &form).await,
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(response) => {
                if !response.is_success() {
                    warn!(
                        "API reported failure (code {:?}): {}",
                        response.code(),
                        response.error().unwrap_or_default()
                    );
                }
                self.store(response.clone());
                Ok(response)
            }
            Err(details) => {
                let err = Error::request(details);
                warn!("{}", err);
                self.store(ApiResponse::request_error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Merge the auth parameters over the caller's parameters
    pub fn build_form(&self, mut params: Params) -> Result<Params> {
        params.merge_over(self.settings().config.auth_params()?);
        Ok(params)
    }

    /// Absolute URL for a relative endpoint path such as `forex/latest`
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidUrl(format!("Invalid endpoint path {}: {}", path, e)))
    }

    /// Perform the POST and parse the body; errors are rendered as details
    async fn send(&self, url: Url, form: &Params) -> std::result::Result<ApiResponse, String> {
        debug!("Making request to: {} ({} form fields)", url, form.len());

        let client = self.settings().client.clone();
        let response = client
            .post(url)
            .form(&form.to_form_pairs())
            .send()
            .await
            .map_err(|e| error_chain(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", error_chain(&e)))?;

        debug!("Response status {} body length: {} bytes", status, text.len());

        ApiResponse::from_json(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            error!("Response text (first 500 chars): {}", truncate(&text, 500));
            format!("HTTP {}: failed to parse response: {}", status, e)
        })
    }

    fn store(&self, response: ApiResponse) {
        *self.last_response.lock().unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    /// The most recently completed response on this transport
    pub fn last_response(&self) -> Option<ApiResponse> {
        self.last_response.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// True iff the last response has `status: true`
    pub fn is_success(&self) -> bool {
        self.last_response().is_some_and(|r| r.is_success())
    }

    /// `None` after a success, otherwise the last failure message
    pub fn error(&self) -> Option<String> {
        match self.last_response() {
            Some(response) => response.error().map(str::to_string),
            None => Some(fcs_models::UNKNOWN_ERROR.to_string()),
        }
    }

    /// The `response` payload of the last response
    pub fn response_data(&self) -> Option<Value> {
        self.last_response().and_then(|r| r.response_data().cloned())
    }

    /// Sign a fresh token with the configured credentials
    pub fn generate_token(&self) -> Result<SignedToken> {
        self.settings().config.generate_token()
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> Config {
        self.settings().config.clone()
    }

    pub fn auth_method(&self) -> AuthMethod {
        self.settings().config.auth_method
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.settings().config.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.settings().config.connect_timeout_secs)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.settings().config)
            .finish()
    }
}

/// Render an error with its sources, e.g. `error sending request: ... Connection refused`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !rendered.contains(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
