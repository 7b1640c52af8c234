use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Registered,
    Failure,
    #[serde(other)]
    Unrecognized,
}

/// JSON body returned by the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerResponse {
    pub status: ResponseStatus,
    pub referral_link: Option<String>,
    pub msg: Option<String>,
}

/// What the controller does with a `ServerResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    SignedUp { referral_link: String },
    AlreadyRegistered { referral_link: String },
    Rejected { message: Option<String> },
}

impl From<ServerResponse> for SignupOutcome {
    fn from(response: ServerResponse) -> Self {
        match (response.status, response.referral_link) {
            (ResponseStatus::Success, Some(referral_link)) => Self::SignedUp { referral_link },
            (ResponseStatus::Registered, Some(referral_link)) => {
                Self::AlreadyRegistered { referral_link }
            }
            // A success without a link has nothing to share.
            (ResponseStatus::Success | ResponseStatus::Registered, None) => {
                Self::Rejected { message: None }
            }
            (ResponseStatus::Failure | ResponseStatus::Unrecognized, _) => Self::Rejected {
                message: response.msg,
            },
        }
    }
}
