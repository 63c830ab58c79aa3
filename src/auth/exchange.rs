//! Client-credentials exchange: trades the configured key/secret for a bearer token.
//!
//! The exchange runs exactly once per client, spawned at construction, and is never retried.
//! Its result settles the client's [`AuthSignal`](crate::auth::AuthSignal).

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
// self
use crate::{
	_prelude::*,
	auth::{AuthSignal, Secret},
	config::{ClientConfig, USER_AGENT as CLIENT_USER_AGENT},
	error::AuthorizationError,
	http::{self, HttpClient},
	obs::{self, CallKind, CallObserver},
};

/// Grant type sent to the token endpoint.
pub const GRANT_TYPE: &str = "client_credentials";

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
}

/// Builds the `Authorization: Basic base64(key:secret)` header value.
pub fn basic_authorization(key: &str, secret: &Secret) -> String {
	let credentials = format!("{key}:{}", secret.expose());

	format!("Basic {}", STANDARD.encode(credentials))
}

/// Performs one `POST {host}/oauth/token` and returns the issued access token.
///
/// `grant_type` is sent in both the query string and the form body.
pub async fn exchange(
	client: &HttpClient,
	config: &ClientConfig,
) -> Result<Secret, AuthorizationError> {
	let url = config.token_url().map_err(|source| AuthorizationError::InvalidUrl { source })?;
	let request = client
		.post(url)
		.query(&[("grant_type", GRANT_TYPE)])
		.header(AUTHORIZATION, basic_authorization(&config.key, &config.secret))
		.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
		.header(USER_AGENT, CLIENT_USER_AGENT)
		.body(format!("grant_type={GRANT_TYPE}"));
	let response =
		http::send(request).await.map_err(|source| AuthorizationError::Transport { source })?;

	if !response.is_ok() {
		return Err(AuthorizationError::Rejected {
			status: response.status,
			body: response.body_text(),
		});
	}

	let token = response
		.decode::<TokenResponse>()
		.map_err(|source| AuthorizationError::MalformedResponse { source })?
		.access_token;

	if token.is_empty() {
		return Err(AuthorizationError::EmptyAccessToken);
	}

	Ok(Secret::new(token))
}

/// Runs the exchange and settles `signal` with its outcome.
pub(crate) async fn authorize(client: HttpClient, config: Arc<ClientConfig>, signal: AuthSignal) {
	let observer = CallObserver::new(CallKind::Authorize, "oauth_token", "/oauth/token");
	let result = observer.observe(exchange(&client, &config)).await;

	if let Err(err) = &result {
		obs::warn_authorization_failure(err);
	}

	signal.settle(result);
}
