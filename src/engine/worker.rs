//! Background search worker.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error};
use parking_lot::Mutex;

use crate::board::Position;
use crate::config::EngineOptions;
use crate::search::{SearchContext, SearchReport};
use crate::sync::StopFlag;
use crate::timer::WallClock;

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    /// A decision is already in progress
    Busy,
    /// The search thread could not be started
    Spawn(String),
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerError::Busy => write!(f, "a search is already running"),
            WorkerError::Spawn(reason) => write!(f, "failed to start search thread: {reason}"),
        }
    }
}

impl std::error::Error for WorkerError {}

/// Active search job state
struct SearchJob<M> {
    /// Stop flag shared with the context
    stop: StopFlag,
    /// Handle to the search thread
    handle: JoinHandle<SearchReport<M>>,
}

impl<M> SearchJob<M> {
    fn join(self) -> SearchReport<M> {
        match self.handle.join() {
            Ok(report) => report,
            Err(_) => {
                error!("search thread panicked");
                SearchReport::default()
            }
        }
    }
}

/// Runs one decision at a time on a background thread.
///
/// The caller's loop stays responsive: [`start`](Self::start) returns at
/// once, [`poll`](Self::poll) collects the result when it is ready, and
/// [`stop`](Self::stop) asks the running decision to finish early with
/// whatever depth it has already committed.
pub struct SearchWorker<P: Position> {
    context: Arc<Mutex<SearchContext>>,
    current_job: Option<SearchJob<P::Move>>,
    _position: PhantomData<fn(P)>,
}

impl<P> SearchWorker<P>
where
    P: Position + Send + 'static,
    P::Move: Send + 'static,
{
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        SearchWorker {
            context: Arc::new(Mutex::new(SearchContext::new(options))),
            current_job: None,
            _position: PhantomData,
        }
    }

    /// Shared search context. Locking it while a job runs blocks until the
    /// job finishes.
    #[must_use]
    pub fn context(&self) -> &Arc<Mutex<SearchContext>> {
        &self.context
    }

    /// Start deciding on a copy of `position` within the configured deadline.
    pub fn start(&mut self, position: &P) -> Result<(), WorkerError> {
        if self.current_job.is_some() {
            return Err(WorkerError::Busy);
        }

        let stop = self.context.lock().stop_flag();
        stop.reset();

        let context = Arc::clone(&self.context);
        let position = position.clone();
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut context = context.lock();
                let deadline = context.options().deadline;
                context.think(&position, deadline, &WallClock::start())
            })
            .map_err(|err| WorkerError::Spawn(err.to_string()))?;

        debug!("search started");
        self.current_job = Some(SearchJob { stop, handle });
        Ok(())
    }

    /// Whether a decision has been started and not yet collected.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.current_job.is_some()
    }

    /// Collect the result if the search thread has finished.
    pub fn poll(&mut self) -> Option<SearchReport<P::Move>> {
        let finished = self
            .current_job
            .as_ref()
            .is_some_and(|job| job.handle.is_finished());
        if finished {
            self.current_job.take().map(SearchJob::join)
        } else {
            None
        }
    }

    /// Block until the running decision finishes. `None` when idle.
    pub fn wait(&mut self) -> Option<SearchReport<P::Move>> {
        self.current_job.take().map(SearchJob::join)
    }

    /// Ask the running decision to finish at its next check point.
    pub fn stop(&self) {
        if let Some(job) = &self.current_job {
            job.stop.stop();
        }
    }
}

impl<P: Position> Drop for SearchWorker<P> {
    fn drop(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop.stop();
            let _ = job.handle.join();
        }
    }
}
