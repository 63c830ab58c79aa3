//! Async client for the Audiosear.ch API: a single client-credentials exchange at construction,
//! bearer-authenticated `GET` calls that wait for that exchange, and thin endpoint wrappers.
//!
//! ```no_run
//! # async fn demo() -> audiosearch::error::Result<()> {
//! use audiosearch::{client::Client, query::Query};
//!
//! let client = Client::new("my-key", "my-secret")?;
//! // Issued before the token arrives; parked until the exchange settles.
//! let episodes = client.search_episodes("jazz", Some(&Query::new().with("size", 5))).await?;
//!
//! println!("{episodes}");
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod obs;
pub mod query;
#[cfg(test)]
mod _preludet {
	//! Helpers shared by unit tests.

	pub use crate::_prelude::*;

	// self
	use crate::{client::Client, config::ClientConfig};

	/// Key used by every unit test client.
	pub const TEST_KEY: &str = "test-key";
	/// Secret used by every unit test client.
	pub const TEST_SECRET: &str = "test-secret";

	/// Builds a client pointed at `host` with the shared test credentials.
	pub fn build_test_client(host: &str) -> Client {
		let config = ClientConfig::builder(TEST_KEY, TEST_SECRET)
			.host(host)
			.build()
			.expect("Test client configuration should be valid.");

		Client::with_config(config).expect("Test client should build inside a Tokio runtime.")
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use serde_json;
pub use time;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
