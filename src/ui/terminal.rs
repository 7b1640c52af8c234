use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{Effect, Element, Slot, UiSurface};
use crate::domain::EMAIL_FIELD;

/// A headless page: slot contents live in memory, every change is logged,
/// and transitions take as long as their effect would on screen.
#[derive(Debug)]
pub struct TerminalSurface {
    action_url: String,
    slots: Mutex<BTreeMap<Slot, String>>,
    alerts: Mutex<Vec<String>>,
}

impl TerminalSurface {
    pub fn new(action_url: String, email: String, submit_label: String) -> Self {
        let slots = BTreeMap::from([
            (Slot::EmailInput, email),
            (Slot::SubmitButton, submit_label),
        ]);
        Self {
            action_url,
            slots: Mutex::new(slots),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Every slot that holds content.
    pub fn slots(&self) -> BTreeMap<Slot, String> {
        lock(&self.slots).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

// Slot writes never panic midway, so a poisoned lock still holds usable data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl UiSurface for TerminalSurface {
    fn text(&self, slot: Slot) -> String {
        lock(&self.slots).get(&slot).cloned().unwrap_or_default()
    }

    fn set_text(&self, slot: Slot, text: &str) {
        tracing::info!(?slot, text, "Slot updated");
        lock(&self.slots).insert(slot, text.to_owned());
    }

    fn set_html(&self, slot: Slot, html: &str) {
        tracing::info!(?slot, bytes = html.len(), "Slot markup replaced");
        lock(&self.slots).insert(slot, html.to_owned());
    }

    fn alert(&self, message: &str) {
        tracing::warn!(alert = message, "Alert shown");
        lock(&self.alerts).push(message.to_owned());
    }

    fn form_action(&self) -> String {
        self.action_url.clone()
    }

    fn form_fields(&self) -> Vec<(String, String)> {
        vec![(EMAIL_FIELD.to_owned(), self.text(Slot::EmailInput))]
    }

    async fn transition(&self, element: Element, effect: Effect) {
        tracing::debug!(?element, ?effect, "Transition started");
        tokio::time::sleep(effect.duration()).await;
    }
}
