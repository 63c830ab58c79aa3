//! Credential material, the client-credentials exchange, and the one-shot authorization gate.

pub mod exchange;
pub mod gate;
pub mod secret;

pub use exchange::{basic_authorization, exchange};
pub use gate::{AuthGate, AuthSignal, AuthState};
pub use secret::*;
