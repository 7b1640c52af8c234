use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::{
    animation::{AnimationError, AnimationStep, PageAnimator},
    domain::{SignupEmail, SignupOutcome, SignupRequest, UiState},
    error::error_chain_fmt,
    form_submitter::{FormSubmitter, SubmissionError},
    share_templates::{render, ShareTemplate},
    ui::{Effect, Element, Slot, UiSurface},
};

pub const INVALID_EMAIL_NOTICE: &str = "Your email was invalid, typo?";
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong, please try again";
pub const PENDING_LABEL: &str = "wait...";
pub const SIGNED_UP_TITLE: &str = "Thanks for signing up";
pub const ALREADY_REGISTERED_TITLE: &str = "You already signed up";
pub const POST_SIGNUP_SUBTITLE: &str = "We'll notify you soon. Want in faster? Invite your friends with the link below, if they signup, you move faster in line";

/// A click on the submit control.
#[derive(Debug, Default)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    Validation(String),
    #[error("The signup endpoint rejected the signup")]
    Rejected(Option<String>),
    #[error("Failed to submit the signup form")]
    Network(#[from] SubmissionError),
}

impl Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SignupError {
    /// The text shown to the user.
    pub fn notice(&self) -> &str {
        match self {
            SignupError::Validation(_) => INVALID_EMAIL_NOTICE,
            SignupError::Rejected(Some(message)) => message,
            SignupError::Rejected(None) | SignupError::Network(_) => GENERIC_FAILURE_NOTICE,
        }
    }

    pub fn state(&self) -> UiState {
        match self {
            SignupError::Validation(_) => UiState::ValidationError,
            SignupError::Rejected(_) | SignupError::Network(_) => UiState::SubmissionError,
        }
    }
}

/// Owns the page's `UiState` and drives the surface through the startup
/// reveal and the signup submission.
pub struct SignupController<U> {
    ui: U,
    submitter: FormSubmitter,
    entry_delay: Duration,
    state: watch::Sender<UiState>,
    entry_started: AtomicBool,
}

impl<U: UiSurface> SignupController<U> {
    pub fn new(ui: U, submitter: FormSubmitter, entry_delay: Duration) -> Self {
        let (state, _) = watch::channel(UiState::Initial);
        Self {
            ui,
            submitter,
            entry_delay,
            state,
            entry_started: AtomicBool::new(false),
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn state(&self) -> UiState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Opens the doors after the startup delay, then reveals the form.
    /// Runs once per controller.
    #[tracing::instrument(name = "Running entry sequence", skip(self))]
    pub async fn run_entry_sequence(&self) -> Result<(), AnimationError> {
        if self.entry_started.swap(true, Ordering::SeqCst) {
            return Err(AnimationError::AlreadyStarted("doors"));
        }
        let ui = &self.ui;

        let mut doors = PageAnimator::new(
            "doors",
            vec![AnimationStep::new(self.entry_delay, move || async move {
                self.advance_startup(UiState::DoorsOpening);
                futures::join!(
                    ui.transition(Element::LeftDoor, Effect::slide("margin-left", "0px", 400)),
                    ui.transition(Element::RightDoor, Effect::slide("margin-right", "0px", 400))
                );
            })],
        );
        doors.run().await?;

        let mut form_reveal = PageAnimator::new(
            "form reveal",
            vec![
                AnimationStep::new(Duration::from_millis(100), move || {
                    ui.transition(Element::Form, Effect::fade_in(200))
                }),
                AnimationStep::new(Duration::ZERO, move || async move {
                    futures::join!(
                        ui.transition(Element::Form, Effect::slide("top", "30px", 200)),
                        ui.transition(Element::Supports, Effect::fade_in(200))
                    );
                }),
                AnimationStep::new(Duration::ZERO, move || {
                    ui.transition(Element::Supports, Effect::slide("margin-top", "40px", 200))
                }),
            ],
        );
        form_reveal.run().await?;

        self.advance_startup(UiState::FormRevealed);
        Ok(())
    }

    /// Validates the typed email, submits the form and updates the page
    /// with the outcome. Returns the state the page is left in.
    #[tracing::instrument(
        name = "Handling signup click",
        skip(self, event),
        fields(email = tracing::field::Empty)
    )]
    pub async fn on_submit_clicked(&self, event: &mut ClickEvent) -> UiState {
        event.prevent_default();

        let current = self.state();
        if current == UiState::Submitting || current.is_terminal() {
            tracing::info!(state = %current, "Ignoring signup click");
            return current;
        }

        let raw_email = self.ui.text(Slot::EmailInput);
        tracing::Span::current().record("email", &tracing::field::display(&raw_email));
        let email = match SignupEmail::parse(raw_email) {
            Ok(email) => email,
            Err(e) => {
                self.report(SignupError::Validation(e));
                return self.state();
            }
        };

        if !self.begin_submission() {
            return self.state();
        }
        let submit_label = self.ui.text(Slot::SubmitButton);
        self.ui.set_text(Slot::SubmitButton, PENDING_LABEL);

        match self.submit(email).await {
            Ok(SignupOutcome::SignedUp { referral_link }) => {
                self.show_referral(&referral_link, SIGNED_UP_TITLE).await;
                self.transition(UiState::Success);
            }
            Ok(SignupOutcome::AlreadyRegistered { referral_link }) => {
                self.show_referral(&referral_link, ALREADY_REGISTERED_TITLE).await;
                self.transition(UiState::AlreadyRegistered);
            }
            Ok(SignupOutcome::Rejected { message }) => {
                self.ui.set_text(Slot::SubmitButton, &submit_label);
                self.report(SignupError::Rejected(message));
            }
            Err(e) => {
                self.ui.set_text(Slot::SubmitButton, &submit_label);
                self.report(e);
            }
        }
        self.state()
    }

    async fn submit(&self, email: SignupEmail) -> Result<SignupOutcome, SignupError> {
        let request = SignupRequest::new(email, self.ui.form_fields());
        tracing::info!(email = %request.email(), "Submitting signup");
        let response = self
            .submitter
            .submit(&self.ui.form_action(), request.fields())
            .await?;
        Ok(response.into())
    }

    /// Fills the share slots and swaps the signup panel for the
    /// post-signup panel.
    async fn show_referral(&self, referral_link: &str, title: &'static str) {
        self.ui.set_text(Slot::ReferralLink, referral_link);
        for (template, slot) in [
            (ShareTemplate::Twitter, Slot::TwitterShare),
            (ShareTemplate::LinkedIn, Slot::LinkedInShare),
            (ShareTemplate::Facebook, Slot::FacebookShare),
        ] {
            self.ui.set_html(slot, &render(template, referral_link));
        }

        let ui = &self.ui;
        let mut page_transition = PageAnimator::new(
            "page transition",
            vec![
                AnimationStep::new(Duration::ZERO, move || {
                    ui.transition(Element::Signup, Effect::fade_out(400))
                }),
                AnimationStep::new(Duration::ZERO, move || {
                    ui.set_text(Slot::Title, title);
                    ui.set_text(Slot::Subtitle, POST_SIGNUP_SUBTITLE);
                    ui.transition(Element::PostSignup, Effect::fade_in(200))
                }),
            ],
        );
        if let Err(e) = page_transition.run().await {
            tracing::error!(error = %e, "Page transition did not run");
        }
    }

    fn report(&self, error: SignupError) {
        match &error {
            SignupError::Network(_) => {
                tracing::error!(error.cause_chain = ?error, "Signup could not be submitted")
            }
            _ => tracing::warn!(error.cause_chain = ?error, "Signup was not accepted"),
        }
        self.ui.alert(error.notice());
        self.transition(error.state());
    }

    fn transition(&self, next: UiState) {
        let previous = self.state.send_replace(next);
        tracing::info!(from = %previous, to = %next, "UI state changed");
    }

    /// Moves to `Submitting` unless a submission is in flight or the flow
    /// has already finished.
    fn begin_submission(&self) -> bool {
        let mut previous = None;
        let started = self.state.send_if_modified(|state| {
            if *state == UiState::Submitting || state.is_terminal() {
                return false;
            }
            previous = Some(*state);
            *state = UiState::Submitting;
            true
        });
        if let Some(previous) = previous {
            tracing::info!(from = %previous, to = %UiState::Submitting, "UI state changed");
        }
        started
    }

    /// Startup transitions never overwrite a state reached through a click.
    fn advance_startup(&self, next: UiState) {
        let mut previous = None;
        self.state.send_if_modified(|state| {
            if !state.is_startup_phase() {
                return false;
            }
            previous = Some(*state);
            *state = next;
            true
        });
        match previous {
            Some(previous) => tracing::info!(from = %previous, to = %next, "UI state changed"),
            None => tracing::debug!(skipped = %next, "Startup transition superseded by signup"),
        }
    }
}
