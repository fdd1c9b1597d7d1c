//! Background parsing
//!
//! Parses run on a rayon pool so an interactive host never blocks on them.
//! Each request gets exactly one reply on its own one-shot channel, or none
//! if the host terminated the worker before the task started.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use crate::config::{self, PssConfig};
use crate::model::PssObject;
use crate::pipeline;

/// A file to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub uri: String,
    pub content: String,
}

impl ParseRequest {
    pub fn new(uri: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            content: content.into(),
        }
    }
}

/// The model of one file, tagged with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResponse {
    pub result: Vec<PssObject>,
    pub uri: String,
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to start parse pool: {0}")]
    Pool(#[from] ThreadPoolBuildError),
}

/// Runs whole-file parses off the caller's thread.
pub struct ParseWorker {
    pool: ThreadPool,
    terminated: CancellationToken,
}

impl ParseWorker {
    /// Worker sized by the process-wide configuration.
    pub fn new() -> Result<Self, WorkerError> {
        let config = config::active();
        Self::with_config(&config)
    }

    pub fn with_config(config: &PssConfig) -> Result<Self, WorkerError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("pss-parse-{i}"));
        if config.worker.threads > 0 {
            builder = builder.num_threads(config.worker.threads);
        }
        let pool = builder.build().map_err(|err| {
            error!(%err, "could not start parse worker pool");
            WorkerError::from(err)
        })?;

        Ok(Self {
            pool,
            terminated: CancellationToken::new(),
        })
    }

    /// Queue a parse and return the channel its reply will arrive on.
    pub fn dispatch(&self, request: ParseRequest) -> oneshot::Receiver<ParseResponse> {
        let (reply, receiver) = oneshot::channel();
        self.dispatch_to(request, reply);
        receiver
    }

    /// Queue a parse that replies on a caller-provided channel.
    pub fn dispatch_to(&self, request: ParseRequest, reply: oneshot::Sender<ParseResponse>) {
        let terminated = self.terminated.clone();
        self.pool.spawn(move || run_task(request, reply, &terminated));
    }

    /// Parse several files in parallel and wait for all of them.
    ///
    /// Responses are not in request order; match them up by `uri`.
    pub fn parse_batch(&self, requests: Vec<ParseRequest>) -> Vec<ParseResponse> {
        self.pool.install(|| {
            requests
                .into_par_iter()
                .filter(|_| !self.terminated.is_cancelled())
                .map(process)
                .collect()
        })
    }

    /// Stop the worker. Tasks that have not started yet deliver nothing;
    /// a parse already running finishes.
    pub fn terminate(&self) {
        self.terminated.cancel();
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.is_cancelled()
    }
}

fn run_task(request: ParseRequest, reply: oneshot::Sender<ParseResponse>, terminated: &CancellationToken) {
    if terminated.is_cancelled() {
        trace!(uri = %request.uri, "worker terminated, request dropped");
        return;
    }
    if reply.is_closed() {
        error!(uri = %request.uri, "no reachable reply channel, parse skipped");
        return;
    }

    let response = process(request);
    if let Err(response) = reply.send(response) {
        debug!(uri = %response.uri, "reply receiver dropped during parse");
    }
}

fn process(request: ParseRequest) -> ParseResponse {
    ParseResponse {
        result: pipeline::parse(&request.uri, &request.content),
        uri: request.uri,
    }
}
