// std
use std::time::Duration;
// self
use crate::obs::{CallKind, CallOutcome};

/// Counts a finished call.
pub fn record_call(kind: CallKind, endpoint: &'static str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"audiosearch_call_total",
		"kind" => kind.as_str(),
		"endpoint" => endpoint,
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, endpoint, outcome);
}

/// Counts a call parked behind the pending credential exchange.
pub fn record_deferral(endpoint: &'static str) {
	#[cfg(feature = "metrics")]
	metrics::counter!("audiosearch_deferred_total", "endpoint" => endpoint).increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = endpoint;
}

/// Records how long a parked call waited for the exchange.
pub fn record_deferral_wait(endpoint: &'static str, waited: Duration) {
	#[cfg(feature = "metrics")]
	metrics::histogram!("audiosearch_deferred_seconds", "endpoint" => endpoint)
		.record(waited.as_secs_f64());
	#[cfg(not(feature = "metrics"))]
	let _ = (endpoint, waited);
}
