//! The page surface the controller drives: named text slots, a few
//! animatable containers, and a blocking notice.

mod terminal;

use std::time::Duration;

use async_trait::async_trait;

pub use terminal::TerminalSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    EmailInput,
    SubmitButton,
    ReferralLink,
    TwitterShare,
    FacebookShare,
    LinkedInShare,
    Title,
    Subtitle,
}

/// Containers whose visibility or position the animators change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    LeftDoor,
    RightDoor,
    Form,
    Supports,
    Signup,
    PostSignup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FadeIn { duration: Duration },
    FadeOut { duration: Duration },
    /// Moves a CSS property to `value`.
    Slide {
        property: &'static str,
        value: &'static str,
        duration: Duration,
    },
}

impl Effect {
    pub fn fade_in(millis: u64) -> Self {
        Effect::FadeIn {
            duration: Duration::from_millis(millis),
        }
    }

    pub fn fade_out(millis: u64) -> Self {
        Effect::FadeOut {
            duration: Duration::from_millis(millis),
        }
    }

    pub fn slide(property: &'static str, value: &'static str, millis: u64) -> Self {
        Effect::Slide {
            property,
            value,
            duration: Duration::from_millis(millis),
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Effect::FadeIn { duration }
            | Effect::FadeOut { duration }
            | Effect::Slide { duration, .. } => *duration,
        }
    }
}

#[async_trait]
pub trait UiSurface: Send + Sync {
    /// Current text of a slot; the value for input slots.
    fn text(&self, slot: Slot) -> String;

    fn set_text(&self, slot: Slot, text: &str);

    /// Replaces the slot's content with markup.
    fn set_html(&self, slot: Slot, html: &str);

    /// Shows a notice the user has to dismiss.
    fn alert(&self, message: &str);

    /// Where the signup form posts to.
    fn form_action(&self) -> String;

    /// Every named field of the signup form, in document order.
    fn form_fields(&self) -> Vec<(String, String)>;

    /// Resolves once the visual effect has finished.
    async fn transition(&self, element: Element, effect: Effect);
}
