//! Immutable client configuration and its validating builder.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Production API host used when no override is supplied.
pub const DEFAULT_HOST: &str = "https://www.audiosear.ch";
/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("audiosearch-rs/", env!("CARGO_PKG_VERSION"));

/// Credentials and host for one client instance. Never mutated after [`ClientConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// OAuth application key.
	pub key: String,
	/// OAuth application secret.
	pub secret: Secret,
	/// API host without a trailing slash.
	pub host: String,
	/// Optional per-request timeout applied to the default HTTP client.
	pub timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Starts a builder for the provided key/secret pair.
	pub fn builder(key: impl Into<String>, secret: impl Into<String>) -> ClientConfigBuilder {
		ClientConfigBuilder::new(key, secret)
	}

	/// Token endpoint: `{host}/oauth/token`.
	pub fn token_url(&self) -> Result<Url, url::ParseError> {
		Url::parse(&format!("{}/oauth/token", self.host))
	}

	/// Resource endpoint: `{host}/api{path}`.
	pub fn api_url(&self, path: &str) -> Result<Url, url::ParseError> {
		Url::parse(&format!("{}/api{path}", self.host))
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// OAuth application key.
	pub key: String,
	/// OAuth application secret.
	pub secret: Secret,
	/// Host override; [`DEFAULT_HOST`] when unset.
	pub host: Option<String>,
	/// Optional per-request timeout.
	pub timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided credentials.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: Secret::new(secret), host: None, timeout: None }
	}

	/// Overrides the API host.
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());

		self
	}

	/// Applies a timeout to every request made by the default HTTP client.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.key.trim().is_empty() {
			return Err(ConfigError::MissingKey);
		}
		if self.secret.is_blank() {
			return Err(ConfigError::MissingSecret);
		}

		let host = normalize_host(self.host.as_deref().unwrap_or(DEFAULT_HOST))?;

		Ok(ClientConfig { key: self.key, secret: self.secret, host, timeout: self.timeout })
	}
}

fn normalize_host(raw: &str) -> Result<String, ConfigError> {
	let host = raw.trim().trim_end_matches('/');

	Url::parse(host)
		.map_err(|source| ConfigError::InvalidHost { host: raw.to_owned(), source })?;

	Ok(host.to_owned())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn build_rejects_blank_credentials() {
		let err = ClientConfig::builder("", "secret").build().expect_err("Empty key must fail.");

		assert!(matches!(err, ConfigError::MissingKey));

		let err = ClientConfig::builder("key", "   ").build().expect_err("Blank secret must fail.");

		assert!(matches!(err, ConfigError::MissingSecret));
	}

	#[test]
	fn build_defaults_to_production_host() {
		let config =
			ClientConfig::builder("key", "secret").build().expect("Config should build.");

		assert_eq!(config.host, DEFAULT_HOST);
		assert_eq!(
			config.token_url().expect("Token URL should parse.").as_str(),
			"https://www.audiosear.ch/oauth/token"
		);
	}

	#[test]
	fn build_strips_trailing_slash_and_validates_host() {
		let config = ClientConfig::builder("key", "secret")
			.host("http://localhost:3000/")
			.build()
			.expect("Config should build.");

		assert_eq!(config.host, "http://localhost:3000");
		assert_eq!(
			config.api_url("/shows/7").expect("API URL should parse.").as_str(),
			"http://localhost:3000/api/shows/7"
		);

		let err = ClientConfig::builder("key", "secret")
			.host("not a host")
			.build()
			.expect_err("Relative host must fail.");

		assert!(matches!(err, ConfigError::InvalidHost { .. }));
	}

	#[test]
	fn debug_output_redacts_secret() {
		let config =
			ClientConfig::builder("key", "hunter2").build().expect("Config should build.");

		assert!(!format!("{config:?}").contains("hunter2"));
	}

	#[test]
	fn user_agent_is_fixed_identifier() {
		assert!(USER_AGENT.starts_with("audiosearch-rs/"));
	}
}
