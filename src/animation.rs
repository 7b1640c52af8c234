//! Runs timed visual steps one after another. A step starts only once the
//! previous step's effect has finished, not merely once its delay elapsed.

use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("The `{0}` sequence has already been started")]
    AlreadyStarted(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running { step: usize },
    Done,
}

type StepAction<'a> = Box<dyn FnOnce() -> BoxFuture<'a, ()> + Send + 'a>;

pub struct AnimationStep<'a> {
    delay: Duration,
    action: StepAction<'a>,
}

impl<'a> AnimationStep<'a> {
    /// `action` is invoked `delay` after the previous step completed; the
    /// step completes when the future it returns resolves.
    pub fn new<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = ()> + Send + 'a,
    {
        Self {
            delay,
            action: Box::new(move || action().boxed()),
        }
    }
}

impl std::fmt::Debug for AnimationStep<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationStep")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// A one-shot sequencer. There is no cancellation: once `run` is polled to
/// completion every step has fired, and the instance cannot be run again.
#[derive(Debug)]
pub struct PageAnimator<'a> {
    name: &'static str,
    steps: Vec<AnimationStep<'a>>,
    state: AnimatorState,
}

impl<'a> PageAnimator<'a> {
    pub fn new(name: &'static str, steps: Vec<AnimationStep<'a>>) -> Self {
        Self {
            name,
            steps,
            state: AnimatorState::Idle,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    #[tracing::instrument(name = "Running animation sequence", skip(self), fields(sequence = self.name, steps = self.steps.len()))]
    pub async fn run(&mut self) -> Result<(), AnimationError> {
        if self.state != AnimatorState::Idle {
            return Err(AnimationError::AlreadyStarted(self.name));
        }

        let steps = std::mem::take(&mut self.steps);
        for (step, AnimationStep { delay, action }) in steps.into_iter().enumerate() {
            self.state = AnimatorState::Running { step };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            action().await;
            tracing::debug!(step, "Animation step completed");
        }
        self.state = AnimatorState::Done;
        Ok(())
    }
}
