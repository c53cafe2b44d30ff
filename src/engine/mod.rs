//! Running decisions off the caller's thread.
//!
//! The search itself is synchronous. An interactive caller hands the
//! position to a [`SearchWorker`] and keeps its own loop going while the
//! decision runs, collecting the move when it is ready.

mod worker;

pub use worker::{SearchWorker, WorkerError};
