//! Transport primitives shared by the credential exchange and the request dispatcher.
//!
//! [`HttpClient`] keeps the reqwest handle in one place so custom clients (proxies,
//! TLS roots, test-only certificate settings) can be injected through
//! [`Client::with_http_client`](crate::client::Client::with_http_client). Responses are read
//! fully into memory and decoded with `serde_path_to_error` so malformed bodies report the
//! offending JSON path.

// std
use std::ops::Deref;
// crates.io
use reqwest::RequestBuilder;
// self
use crate::{_prelude::*, config::ClientConfig, error::ConfigError};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct HttpClient(pub ReqwestClient);
impl HttpClient {
	/// Builds the default client for `config`, applying its timeout when present.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder();

		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
impl From<ReqwestClient> for HttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl Deref for HttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Fully buffered HTTP response.
#[derive(Clone, Debug)]
pub(crate) struct BufferedResponse {
	pub(crate) status: u16,
	pub(crate) body: Vec<u8>,
}
impl BufferedResponse {
	pub(crate) fn is_ok(&self) -> bool {
		self.status == 200
	}

	/// Lossy UTF-8 rendering of the body for error reports.
	pub(crate) fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	pub(crate) fn decode<T>(&self) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
	where
		T: DeserializeOwned,
	{
		decode_json(&self.body)
	}
}

/// Sends `request` and buffers the full response body.
pub(crate) async fn send(request: RequestBuilder) -> Result<BufferedResponse, ReqwestError> {
	let response = request.send().await?;
	let status = response.status().as_u16();
	let body = response.bytes().await?.to_vec();

	Ok(BufferedResponse { status, body })
}

/// Decodes JSON while tracking the path to the first failing field.
pub(crate) fn decode_json<T>(bytes: &[u8]) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Show {
		#[allow(dead_code)]
		id: u64,
	}

	#[test]
	fn decode_reports_failing_path() {
		let err = decode_json::<Show>(br#"{"id":"seven"}"#)
			.expect_err("String id should fail to decode.");

		assert_eq!(err.path().to_string(), "id");
	}

	#[test]
	fn buffered_response_only_accepts_200() {
		let ok = BufferedResponse { status: 200, body: b"{}".to_vec() };
		let created = BufferedResponse { status: 201, body: b"{}".to_vec() };

		assert!(ok.is_ok());
		assert!(!created.is_ok());
		assert_eq!(created.body_text(), "{}");
	}
}
