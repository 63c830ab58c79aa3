//! Demonstrates that calls issued right after construction wait for the credential exchange,
//! using a local mock of the Audiosear.ch API.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use audiosearch::{client::Client, config::ClientConfig, endpoints::ChartsRequest, query::Query};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.delay(Duration::from_millis(250))
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"token_type\":\"bearer\"}");
		})
		.await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/search/episodes/jazz");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"total_results\":1,\"results\":[{\"id\":1,\"title\":\"Jazz Hour\"}]}");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/chart_daily");
			then.status(200).header("content-type", "application/json").body("{\"days\":[]}");
		})
		.await;

	let config = ClientConfig::builder("demo-key", "demo-secret").host(server.base_url()).build()?;
	let client = Client::with_config(config)?;

	println!("Authorized at construction: {}.", client.is_authorized());

	let episodes = client.search_episodes("jazz", Some(&Query::new().with("size", 1))).await?;
	let charts = client.get_charts(&ChartsRequest::default().country("gb")).await?;

	println!("Episodes: {episodes}.");
	println!("Charts: {charts}.");

	token_mock.assert_async().await;

	Ok(())
}
