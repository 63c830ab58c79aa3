// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use audiosearch::{
	client::Client,
	config::ClientConfig,
	error::{AuthorizationError, ConfigError, Error},
};

const KEY: &str = "key-authorization";
const SECRET: &str = "secret-authorization";
const BASIC: &str = "Basic a2V5LWF1dGhvcml6YXRpb246c2VjcmV0LWF1dGhvcml6YXRpb24=";

fn build_client(server: &MockServer) -> Client {
	let config = ClientConfig::builder(KEY, SECRET)
		.host(server.base_url())
		.build()
		.expect("Mock host should produce a valid configuration.");

	Client::with_config(config).expect("Client should build inside the test runtime.")
}

#[tokio::test]
async fn missing_credentials_fail_before_any_network_call() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).body("{\"access_token\":\"never\"}");
		})
		.await;

	for (key, secret) in [("", SECRET), (KEY, ""), ("", "")] {
		let err = ClientConfig::builder(key, secret)
			.host(server.base_url())
			.build()
			.expect_err("Blank credentials must be rejected.");

		assert!(matches!(err, ConfigError::MissingKey | ConfigError::MissingSecret));
	}

	tokio::time::sleep(Duration::from_millis(50)).await;

	token.assert_calls_async(0).await;
}

#[tokio::test]
async fn exchange_runs_once_without_caller_trigger() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.query_param("grant_type", "client_credentials")
				.header("authorization", BASIC)
				.body("grant_type=client_credentials");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"auto-token\",\"token_type\":\"bearer\"}");
		})
		.await;
	let client = build_client(&server);

	client.authorized().await.expect("Exchange should succeed without an explicit trigger.");

	assert!(client.is_authorized());

	client.authorized().await.expect("Settled exchange should be reported again.");

	token.assert_calls_async(1).await;
}

#[tokio::test]
async fn clones_share_one_exchange_while_clients_do_not() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).body("{\"access_token\":\"shared\"}");
		})
		.await;
	let first = build_client(&server);
	let clone = first.clone();

	first.authorized().await.expect("First client should authorize.");
	clone.authorized().await.expect("Clone should reuse the same authorization.");

	token.assert_calls_async(1).await;

	let second = build_client(&server);

	second.authorized().await.expect("Second client should authorize on its own.");

	token.assert_calls_async(2).await;
}

#[tokio::test]
async fn rejected_exchange_fails_pending_and_later_calls() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(401)
				.delay(Duration::from_millis(200))
				.body("{\"error\":\"invalid_client\"}");
		})
		.await;

	let resource = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/trending/");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);
	let pending = client.get_trending().await.expect_err("Deferred call must not hang.");

	assert!(matches!(
		pending,
		Error::Authorization(ref inner)
			if matches!(**inner, AuthorizationError::Rejected { status: 401, .. })
	));

	let later = client.get_trending().await.expect_err("Later calls must fail the same way.");

	assert!(matches!(later, Error::Authorization(_)));
	assert!(!client.is_authorized());

	resource.assert_calls_async(0).await;
}

#[tokio::test]
async fn malformed_token_body_is_an_authorization_failure() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).body("not json");
		})
		.await;

	let client = build_client(&server);
	let err = client.authorized().await.expect_err("Unparseable token body must fail.");

	assert!(matches!(
		err,
		Error::Authorization(ref inner)
			if matches!(**inner, AuthorizationError::MalformedResponse { .. })
	));
}
