//! Drivers that perform controller effects against a [`LauncherService`].

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use anyhow::{Context, Result};

use crate::controller::{Completion, Controller, Effect, Job, Outcome, Request};
use crate::remote::LauncherService;

/// Runs one job to completion on the current thread.
pub fn execute(service: &dyn LauncherService, job: &Job) -> Completion {
    let span = tracing::debug_span!("job", kind = job.request.label(), seq = job.ticket.seq);
    let _enter = span.enter();

    let outcome = match &job.request {
        Request::Login { username, password } => {
            Outcome::Login(service.login(username, password).map_err(user_message))
        }
        Request::UpdateProfile { username, update } => Outcome::Profile(
            service
                .update_profile(username, update)
                .map_err(user_message),
        ),
        Request::FetchCatalog { token } => {
            Outcome::Catalog(service.list_establishments(token).map_err(user_message))
        }
        Request::Rename { token, id, name } => Outcome::Rename(
            service
                .rename_establishment(token, id, name)
                .map_err(user_message),
        ),
    };
    Completion {
        ticket: job.ticket,
        outcome,
    }
}

fn user_message(err: anyhow::Error) -> String {
    tracing::debug!(error = %format!("{:#}", err), "job failed");
    err.to_string()
}

/// Performs effects synchronously, feeding every completion back into the
/// controller until nothing is left to do. Returns the redirect target when
/// one was requested; redirects are not opened here.
pub fn run_to_idle(
    controller: &mut Controller,
    service: &dyn LauncherService,
    effects: Vec<Effect>,
) -> Option<String> {
    let mut queue: VecDeque<Effect> = effects.into();
    let mut redirect = None;
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Call(job) => {
                let completion = execute(service, &job);
                queue.extend(controller.complete(completion));
            }
            Effect::Redirect(target) => redirect = Some(target),
        }
    }
    redirect
}

/// Background thread that runs jobs one at a time and hands completions
/// back to the owner of the controller.
///
/// Dropping the worker closes the job channel; the thread exits once the
/// job it is running, if any, returns.
pub struct Worker {
    jobs: Sender<Job>,
    done: Receiver<Completion>,
}

impl Worker {
    pub fn spawn<S>(service: S) -> Result<Self>
    where
        S: LauncherService + Send + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (done_tx, done_rx) = mpsc::channel::<Completion>();
        thread::Builder::new()
            .name("launcher-worker".to_string())
            .spawn(move || {
                for job in job_rx {
                    let completion = execute(&service, &job);
                    if done_tx.send(completion).is_err() {
                        break;
                    }
                }
            })
            .context("spawn worker thread")?;
        Ok(Self {
            jobs: job_tx,
            done: done_rx,
        })
    }

    pub fn submit(&self, job: Job) -> Result<()> {
        self.jobs.send(job).context("worker stopped")
    }

    /// Next finished job, if any, without blocking.
    pub fn try_recv(&self) -> Option<Completion> {
        match self.done.try_recv() {
            Ok(c) => Some(c),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Completion> {
        self.done.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
