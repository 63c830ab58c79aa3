//! Endpoint wrappers. Each method builds a path and delegates to the gated dispatcher.

pub mod charts;

pub use charts::*;

// self
use crate::{_prelude::*, client::Client, query::Query};

/// Resource family used by [`Client::get_related`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RelatedKind {
	/// `/episodes/{id}/related/`.
	#[default]
	Episodes,
	/// `/shows/{id}/related/`.
	Shows,
	/// `/people/{id}/related/`.
	People,
}
impl RelatedKind {
	/// Path segment for this resource family.
	pub const fn as_str(self) -> &'static str {
		match self {
			RelatedKind::Episodes => "episodes",
			RelatedKind::Shows => "shows",
			RelatedKind::People => "people",
		}
	}
}
impl Display for RelatedKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Number of tastemaker picks requested when the caller does not say.
pub const DEFAULT_TASTEMAKERS: u32 = 5;

impl Client {
	/// Full-text episode search: `/search/episodes/{query}`.
	pub async fn search_episodes(&self, query: &str, params: Option<&Query>) -> Result<JsonValue> {
		self.dispatch("search_episodes", &search_path("episodes", query), params).await
	}

	/// Full-text people search: `/search/people/{query}`.
	pub async fn search_people(&self, query: &str, params: Option<&Query>) -> Result<JsonValue> {
		self.dispatch("search_people", &search_path("people", query), params).await
	}

	/// Single show: `/shows/{id}`.
	pub async fn get_show(&self, id: u64) -> Result<JsonValue> {
		self.dispatch("get_show", &format!("/shows/{id}"), None).await
	}

	/// Single episode: `/episodes/{id}`.
	pub async fn get_episode(&self, id: u64) -> Result<JsonValue> {
		self.dispatch("get_episode", &format!("/episodes/{id}"), None).await
	}

	/// Currently trending items: `/trending/`.
	pub async fn get_trending(&self) -> Result<JsonValue> {
		self.dispatch("get_trending", "/trending/", None).await
	}

	/// Items related to `id`: `/{kind}/{id}/related/`, with `kind` defaulting to episodes.
	pub async fn get_related(&self, id: u64, kind: Option<RelatedKind>) -> Result<JsonValue> {
		let kind = kind.unwrap_or_default();

		self.dispatch("get_related", &format!("/{kind}/{id}/related/"), None).await
	}

	/// Tastemaker episode picks: `/tastemakers/episodes/{n}`, with `n` defaulting to 5.
	pub async fn get_tastemakers(&self, count: Option<u32>) -> Result<JsonValue> {
		let count = count.unwrap_or(DEFAULT_TASTEMAKERS);

		self.dispatch("get_tastemakers", &format!("/tastemakers/episodes/{count}"), None).await
	}
}

/// Builds `/search/{kind}/{query}` with `query` percent-encoded as one path segment.
pub(crate) fn search_path(kind: &str, query: &str) -> String {
	format!("/search/{kind}/{}", urlencoding::encode(query))
}
