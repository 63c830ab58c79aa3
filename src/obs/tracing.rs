// std
use std::time::Duration;
// self
use crate::{_prelude::*, error::AuthorizationError, obs::CallKind};

/// Span wrapping a single call; zero-sized when `tracing` is disabled.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens `audiosearch.call` with the call's kind, endpoint label, and path.
	pub fn new(kind: CallKind, endpoint: &'static str, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		return Self {
			span: tracing::info_span!("audiosearch.call", kind = kind.as_str(), endpoint, path),
		};
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint, path);

			Self {}
		}
	}

	/// Runs `fut` inside the span.
	pub async fn instrument<Fut>(&self, fut: Fut) -> Fut::Output
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		return tracing::Instrument::instrument(fut, self.span.clone()).await;
		#[cfg(not(feature = "tracing"))]
		fut.await
	}
}

pub(crate) fn trace_parked(endpoint: &'static str, path: &str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(endpoint, path, "parked until authorization settles");
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, path);
}

pub(crate) fn trace_resumed(endpoint: &'static str, path: &str, waited: Duration, authorized: bool) {
	#[cfg(feature = "tracing")]
	tracing::debug!(
		endpoint,
		path,
		waited_ms = waited.as_millis() as u64,
		authorized,
		"resumed after authorization settled"
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, path, waited, authorized);
}

/// Emits a diagnostic for a failed credential exchange, including the raw body on rejection.
pub fn warn_authorization_failure(err: &AuthorizationError) {
	#[cfg(feature = "tracing")]
	match err {
		AuthorizationError::Rejected { status, body } =>
			tracing::warn!(status, body = body.as_str(), "token endpoint rejected credentials"),
		other => tracing::warn!(error = %other, "credential exchange failed"),
	}
	#[cfg(not(feature = "tracing"))]
	let _ = err;
}
