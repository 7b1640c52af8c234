mod server_response;
mod signup_email;
mod signup_request;
mod ui_state;

pub use server_response::{ResponseStatus, ServerResponse, SignupOutcome};
pub use signup_email::{is_valid_email, SignupEmail};
pub use signup_request::{SignupRequest, EMAIL_FIELD};
pub use ui_state::UiState;
