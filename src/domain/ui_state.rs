/// The visible phase of the signup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Initial,
    DoorsOpening,
    FormRevealed,
    Submitting,
    Success,
    AlreadyRegistered,
    ValidationError,
    SubmissionError,
}

impl UiState {
    /// The flow does not resume after these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, UiState::Success | UiState::AlreadyRegistered)
    }

    pub fn is_recoverable_error(&self) -> bool {
        matches!(self, UiState::ValidationError | UiState::SubmissionError)
    }

    /// Whether the startup reveal may still move the page along.
    pub fn is_startup_phase(&self) -> bool {
        matches!(self, UiState::Initial | UiState::DoorsOpening)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::Initial => "initial",
            UiState::DoorsOpening => "doors_opening",
            UiState::FormRevealed => "form_revealed",
            UiState::Submitting => "submitting",
            UiState::Success => "success",
            UiState::AlreadyRegistered => "already_registered",
            UiState::ValidationError => "validation_error",
            UiState::SubmissionError => "submission_error",
        }
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
