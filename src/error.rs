//! Client-level error types shared across configuration, authorization, and requests.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any network traffic.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential exchange failed; every call waiting on it receives the same failure.
	#[error(transparent)]
	Authorization(#[from] Arc<AuthorizationError>),
	/// A resource call failed.
	#[error(transparent)]
	Request(#[from] RequestError),
}
impl From<AuthorizationError> for Error {
	fn from(e: AuthorizationError) -> Self {
		Self::Authorization(Arc::new(e))
	}
}

/// Configuration and validation failures raised at construction.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// API key is empty or missing.
	#[error("Audiosear.ch API requires a non-empty key.")]
	MissingKey,
	/// API secret is empty or missing.
	#[error("Audiosear.ch API requires a non-empty secret.")]
	MissingSecret,
	/// Host override is not a valid absolute URL.
	#[error("Host `{host}` is not a valid URL.")]
	InvalidHost {
		/// Host string supplied by the caller.
		host: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The client was constructed outside a Tokio runtime, so the exchange cannot be spawned.
	#[error("Client must be constructed inside a Tokio runtime.")]
	NoRuntime,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures of the one-time credential exchange.
#[derive(Debug, ThisError)]
pub enum AuthorizationError {
	/// Token endpoint URL could not be assembled from the host.
	#[error("Token endpoint URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token endpoint could not be reached.
	#[error("Network error occurred while calling the token endpoint.")]
	Transport {
		/// Underlying HTTP client failure.
		#[source]
		source: ReqwestError,
	},
	/// Token endpoint answered with a non-200 status.
	#[error("Token endpoint rejected the credentials with status {status}.")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Raw response body, kept for diagnostics.
		body: String,
	},
	/// Token endpoint responded with a body lacking a usable `access_token`.
	#[error("Token endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: JsonPathError,
	},
	/// Token endpoint returned an empty `access_token`.
	#[error("Token endpoint returned an empty access token.")]
	EmptyAccessToken,
	/// Exchange task ended before settling (runtime shutdown or client dropped).
	#[error("Credential exchange ended before producing a token.")]
	Aborted,
}

/// Failures of a single resource call.
#[derive(Debug, ThisError)]
pub enum RequestError {
	/// Request URL could not be assembled from the host and path.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidUrl {
		/// Relative path supplied to the dispatcher.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: ReqwestError,
	},
	/// API answered with a non-200 status.
	#[error("API returned status {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// API responded with a body that could not be decoded.
	#[error("API returned a body that could not be decoded.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: JsonPathError,
	},
}
impl From<ReqwestError> for RequestError {
	fn from(e: ReqwestError) -> Self {
		Self::Transport { source: e }
	}
}
