//! One-shot authorization gate.
//!
//! The exchange task owns the only [`AuthSignal`]; settling consumes it, so the state moves
//! from pending to authorized (or failed) exactly once and is never reset. Every call
//! holds an [`AuthGate`] and waits on it before touching the network. Waiters that arrive
//! after settlement observe the stored state immediately without suspending.

// crates.io
use tokio::sync::watch;
// self
use crate::{_prelude::*, auth::Secret, error::AuthorizationError};

/// Authorization state observed through the gate.
#[derive(Clone, Debug)]
pub enum AuthState {
	/// Exchange has not settled yet.
	Pending,
	/// Exchange succeeded with the contained bearer token.
	Authorized(Secret),
	/// Exchange failed; the failure is shared with every waiter.
	Failed(Arc<AuthorizationError>),
}
impl AuthState {
	/// Returns `true` once the exchange has produced a token or failed.
	pub fn is_settled(&self) -> bool {
		!matches!(self, Self::Pending)
	}

	fn outcome(&self) -> Result<Secret> {
		match self {
			Self::Authorized(token) => Ok(token.clone()),
			Self::Failed(err) => Err(Error::Authorization(Arc::clone(err))),
			Self::Pending => Err(AuthorizationError::Aborted.into()),
		}
	}
}

/// Creates a connected signal/gate pair starting in [`AuthState::Pending`].
pub fn channel() -> (AuthSignal, AuthGate) {
	let (tx, rx) = watch::channel(AuthState::Pending);

	(AuthSignal(tx), AuthGate(rx))
}

/// Write side of the gate. Consumed by [`AuthSignal::settle`], so it can fire at most once.
#[derive(Debug)]
pub struct AuthSignal(watch::Sender<AuthState>);
impl AuthSignal {
	/// Publishes the exchange result to every current and future waiter.
	pub fn settle(self, result: Result<Secret, AuthorizationError>) {
		let state = match result {
			Ok(token) => AuthState::Authorized(token),
			Err(err) => AuthState::Failed(Arc::new(err)),
		};

		self.0.send_replace(state);
	}
}

/// Read side of the gate; cheap to clone.
#[derive(Clone, Debug)]
pub struct AuthGate(watch::Receiver<AuthState>);
impl AuthGate {
	/// Returns `true` once the exchange has settled either way.
	pub fn is_settled(&self) -> bool {
		self.0.borrow().is_settled()
	}

	/// Returns `true` once the exchange has produced a token.
	pub fn is_authorized(&self) -> bool {
		matches!(*self.0.borrow(), AuthState::Authorized(_))
	}

	/// Returns the bearer token once the exchange has succeeded.
	///
	/// Resolves immediately when the gate is already settled. If the signal is dropped without
	/// settling, waiters receive [`AuthorizationError::Aborted`].
	pub async fn ready(&self) -> Result<Secret> {
		let mut rx = self.0.clone();
		let settled = rx.wait_for(AuthState::is_settled).await.map(|state| (*state).clone());

		match settled {
			Ok(state) => state.outcome(),
			Err(_) => Err(AuthorizationError::Aborted.into()),
		}
	}
}
