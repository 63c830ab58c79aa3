//! Client construction and the gated request dispatcher.
//!
//! Constructing a [`Client`] spawns the client-credentials exchange on the current Tokio
//! runtime. Every resource call waits on the client's [`AuthGate`] first: calls issued
//! before the exchange settles are parked and proceed independently once it does, calls
//! issued afterwards go straight to the network. Each call produces exactly one `GET`;
//! nothing is cached or retried.

// crates.io
use reqwest::header::USER_AGENT;
use tokio::{runtime::Handle, task::AbortHandle};
// self
use crate::{
	_prelude::*,
	auth::{self, AuthGate, Secret, exchange},
	config::{ClientConfig, USER_AGENT as CLIENT_USER_AGENT},
	error::{ConfigError, RequestError},
	http::{self, HttpClient},
	obs::{CallKind, CallObserver, Deferral},
	query::Query,
};

/// Audiosear.ch API client.
///
/// Clones share one configuration and one authorization lifecycle. Independently constructed
/// clients never share tokens.
#[derive(Clone)]
pub struct Client {
	inner: Arc<Inner>,
}
impl Client {
	/// Creates a client for the default host and starts the credential exchange.
	///
	/// Fails without touching the network when `key` or `secret` is empty, or when called
	/// outside a Tokio runtime.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
		Self::with_config(ClientConfig::builder(key, secret).build()?)
	}

	/// Creates a client from a prepared configuration using the default HTTP client.
	pub fn with_config(config: ClientConfig) -> Result<Self> {
		let client = HttpClient::from_config(&config)?;

		Self::with_http_client(config, client)
	}

	/// Creates a client that reuses the caller-provided HTTP client.
	pub fn with_http_client(config: ClientConfig, client: impl Into<HttpClient>) -> Result<Self> {
		let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
		let client = client.into();
		let config = Arc::new(config);
		let (signal, gate) = auth::gate::channel();
		let task = runtime.spawn(exchange::authorize(client.clone(), Arc::clone(&config), signal));

		Ok(Self { inner: Arc::new(Inner { config, client, gate, exchange: task.abort_handle() }) })
	}

	/// Configuration this client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	/// Returns `true` once the credential exchange has produced a token.
	pub fn is_authorized(&self) -> bool {
		self.inner.gate.is_authorized()
	}

	/// Waits for the credential exchange and reports its outcome.
	pub async fn authorized(&self) -> Result<()> {
		self.inner.gate.ready().await.map(|_| ())
	}

	/// Issues `GET {host}/api{path}` and returns the parsed JSON body.
	pub async fn get(&self, path: &str, query: Option<&Query>) -> Result<JsonValue> {
		self.dispatch("get", path, query).await
	}

	/// Issues `GET {host}/api{path}` and decodes the body into `T`.
	pub async fn get_as<T>(&self, path: &str, query: Option<&Query>) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.dispatch("get_as", path, query).await
	}

	pub(crate) async fn dispatch<T>(
		&self,
		endpoint: &'static str,
		path: &str,
		query: Option<&Query>,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		CallObserver::new(CallKind::Resource, endpoint, path)
			.observe(async {
				let token = self.wait_for_token(endpoint, path).await?;

				self.send_authorized(&token, path, query).await
			})
			.await
	}

	async fn wait_for_token(&self, endpoint: &'static str, path: &str) -> Result<Secret> {
		if self.inner.gate.is_settled() {
			return self.inner.gate.ready().await;
		}

		let deferral = Deferral::park(endpoint, path);
		let token = self.inner.gate.ready().await;

		deferral.resume(token.is_ok());

		token
	}

	async fn send_authorized<T>(&self, token: &Secret, path: &str, query: Option<&Query>) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = self
			.inner
			.config
			.api_url(path)
			.map_err(|source| RequestError::InvalidUrl { path: path.to_owned(), source })?;
		let mut request = self
			.inner
			.client
			.get(url)
			.bearer_auth(token.expose())
			.header(USER_AGENT, CLIENT_USER_AGENT);

		if let Some(query) = query.filter(|query| !query.is_empty()) {
			request = request.query(query);
		}

		let response = http::send(request).await.map_err(RequestError::from)?;

		if !response.is_ok() {
			return Err(RequestError::Status { status: response.status, body: response.body_text() }
				.into());
		}

		response.decode().map_err(|source| RequestError::MalformedResponse { source }.into())
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("config", &self.inner.config)
			.field("authorized", &self.is_authorized())
			.finish()
	}
}

struct Inner {
	config: Arc<ClientConfig>,
	client: HttpClient,
	gate: AuthGate,
	exchange: AbortHandle,
}
impl Drop for Inner {
	fn drop(&mut self) {
		self.exchange.abort();
	}
}
