//! Optional observability for authorization and resource calls.
//!
//! # Feature Flags
//!
//! - `tracing`: each call runs inside an `audiosearch.call` span carrying `kind`, `endpoint`
//!   and `path`; calls parked behind the credential exchange log when they park and when they
//!   resume; failed exchanges log a warning with the raw response.
//! - `metrics`: `audiosearch_call_total{kind, endpoint, outcome}` per call,
//!   `audiosearch_deferred_total{endpoint}` per parked call, and the
//!   `audiosearch_deferred_seconds{endpoint}` histogram for time spent parked.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::time::Instant;
// self
use crate::_prelude::*;

/// Call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Client-credentials exchange against `/oauth/token`.
	Authorize,
	/// Authenticated `GET` against `/api`.
	Resource,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Authorize => "authorize",
			CallKind::Resource => "resource",
		}
	}
}

/// Terminal outcome labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}

	fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { Self::Success } else { Self::Failure }
	}
}

/// Observes one call from start to finish: runs it inside its span and records its outcome.
#[derive(Debug)]
pub struct CallObserver {
	kind: CallKind,
	endpoint: &'static str,
	span: CallSpan,
}
impl CallObserver {
	/// Opens the span for a call to `path`.
	pub fn new(kind: CallKind, endpoint: &'static str, path: &str) -> Self {
		Self { kind, endpoint, span: CallSpan::new(kind, endpoint, path) }
	}

	/// Drives `fut` inside the call span and records whether it succeeded.
	pub async fn observe<Fut, T, E>(&self, fut: Fut) -> Result<T, E>
	where
		Fut: Future<Output = Result<T, E>>,
	{
		let result = self.span.instrument(fut).await;

		record_call(self.kind, self.endpoint, CallOutcome::of(&result));

		result
	}
}

/// A resource call parked until the credential exchange settles.
///
/// Created only when the gate is still pending; [`Deferral::resume`] closes it out.
#[derive(Debug)]
pub struct Deferral<'a> {
	endpoint: &'static str,
	path: &'a str,
	parked_at: Instant,
}
impl<'a> Deferral<'a> {
	/// Marks `path` as parked.
	pub fn park(endpoint: &'static str, path: &'a str) -> Self {
		trace_parked(endpoint, path);
		record_deferral(endpoint);

		Self { endpoint, path, parked_at: Instant::now() }
	}

	/// Reports how long the call waited and whether the exchange produced a token.
	pub fn resume(self, authorized: bool) {
		let waited = self.parked_at.elapsed();

		trace_resumed(self.endpoint, self.path, waited, authorized);
		record_deferral_wait(self.endpoint, waited);
	}
}
