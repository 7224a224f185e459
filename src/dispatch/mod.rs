//! Bounded-concurrency request dispatch.
//!
//! A run spawns one task per request id. Each task waits for a semaphore
//! permit, samples a profile and an endpoint path, performs a GET through a
//! [`Transport`] under a per-request timeout, records a [`RequestOutcome`],
//! then sleeps out the jittered pacing delay before giving its permit back.
//! Transport failures become failed outcomes; only configuration errors and
//! external cancellation end a run early.
mod outcome;
mod plan;
mod runner;
mod selection;
mod transport;


pub use outcome::{NO_RESPONSE_STATUS, RequestOutcome};
pub use plan::{DEFAULT_REQUEST_TIMEOUT, DispatchPlan, ENDPOINT_PATHS};
pub use runner::Dispatcher;
pub use selection::SelectionSource;
pub use transport::{ProbeRequest, ProbeResponse, ReqwestTransport, Transport, TransportOptions};
