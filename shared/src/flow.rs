//! The "will you come?" prompt shown on the landing screen.
//!
//! Saying yes sends the visitor to the confirmation form. Saying no asks for
//! a name and records a negative intention.

use log::{error, info};
use thiserror::Error;

use crate::models::NewIntention;
use crate::store::IntentionStore;

pub const ASK_NAME_MESSAGE: &str = "Please enter your name.";
pub const DECLINED_MESSAGE: &str =
    "Sorry you can't make it! We hope to see you next time. Thanks for letting us know.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save your answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineStep {
    Initial,
    AskName,
    Confirmed,
}

/// Where the visitor should go after a step completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Visitor is coming; continue on the confirmation form.
    GoToConfirmation,
    /// Stay on the prompt and show the current step.
    Stay(DeclineStep),
    /// The answer was stored under this id.
    Recorded(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("Cannot {action} from step {from:?}")]
    InvalidTransition {
        from: DeclineStep,
        action: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineFlow {
    step: DeclineStep,
    name: String,
    message: Option<String>,
    saving: bool,
}

impl Default for DeclineFlow {
    fn default() -> Self {
        Self {
            step: DeclineStep::Initial,
            name: String::new(),
            message: None,
            saving: false,
        }
    }
}

impl DeclineFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> DeclineStep {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn choose_attend(&mut self) -> Result<FlowOutcome, FlowError> {
        self.expect_step(DeclineStep::Initial, "attend")?;
        Ok(FlowOutcome::GoToConfirmation)
    }

    pub fn choose_decline(&mut self) -> Result<FlowOutcome, FlowError> {
        self.expect_step(DeclineStep::Initial, "decline")?;
        self.step = DeclineStep::AskName;
        self.message = None;
        Ok(FlowOutcome::Stay(self.step))
    }

    /// Back to the yes/no question with a clean slate.
    pub fn back(&mut self) -> FlowOutcome {
        *self = Self::default();
        FlowOutcome::Stay(self.step)
    }

    /// Records the negative answer. Store failures keep the visitor on the
    /// name step so they can resubmit.
    pub async fn submit<S>(&mut self, store: &S) -> Result<FlowOutcome, FlowError>
    where
        S: IntentionStore + ?Sized,
    {
        self.expect_step(DeclineStep::AskName, "submit")?;

        let name = self.name.trim().to_string();
        if name.is_empty() {
            self.message = Some(ASK_NAME_MESSAGE.to_string());
            return Ok(FlowOutcome::Stay(self.step));
        }

        self.saving = true;
        self.message = None;

        let result = store
            .add_intention(NewIntention {
                name,
                will_attend: false,
            })
            .await;

        self.saving = false;

        match result {
            Ok(id) => {
                info!("Recorded decline id={}", id);
                self.step = DeclineStep::Confirmed;
                self.message = Some(DECLINED_MESSAGE.to_string());
                Ok(FlowOutcome::Recorded(id))
            }
            Err(e) => {
                error!("Failed to record decline: {}", e);
                self.step = DeclineStep::AskName;
                self.message = Some(SAVE_FAILED_MESSAGE.to_string());
                Ok(FlowOutcome::Stay(self.step))
            }
        }
    }

    fn expect_step(&self, expected: DeclineStep, action: &'static str) -> Result<(), FlowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_intention_store::MockIntentionStore;

    #[test]
    fn attending_goes_to_confirmation() {
        let mut flow = DeclineFlow::new();
        assert_eq!(flow.choose_attend(), Ok(FlowOutcome::GoToConfirmation));
        assert_eq!(flow.step(), DeclineStep::Initial);
    }

    #[tokio::test]
    async fn declining_records_a_negative_intention() {
        let store = MockIntentionStore::new();
        let mut flow = DeclineFlow::new();

        flow.choose_decline().unwrap();
        assert_eq!(flow.step(), DeclineStep::AskName);

        flow.set_name("  Caio ");
        let outcome = flow.submit(&store).await.unwrap();

        assert!(matches!(outcome, FlowOutcome::Recorded(_)));
        assert_eq!(flow.step(), DeclineStep::Confirmed);
        assert_eq!(flow.message(), Some(DECLINED_MESSAGE));

        let stored = store.get_intentions().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Caio");
        assert!(!stored[0].will_attend);
    }

    #[tokio::test]
    async fn blank_name_stays_on_name_step() {
        let store = MockIntentionStore::new();
        let mut flow = DeclineFlow::new();
        flow.choose_decline().unwrap();
        flow.set_name("   ");

        let outcome = flow.submit(&store).await.unwrap();

        assert_eq!(outcome, FlowOutcome::Stay(DeclineStep::AskName));
        assert_eq!(flow.message(), Some(ASK_NAME_MESSAGE));
        assert!(store.get_intentions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_returns_to_name_step() {
        let store = MockIntentionStore::new();
        store.fail_writes(true);
        let mut flow = DeclineFlow::new();
        flow.choose_decline().unwrap();
        flow.set_name("Caio");

        let outcome = flow.submit(&store).await.unwrap();

        assert_eq!(outcome, FlowOutcome::Stay(DeclineStep::AskName));
        assert_eq!(flow.message(), Some(SAVE_FAILED_MESSAGE));
        assert_eq!(flow.name(), "Caio");
        assert!(!flow.is_saving());
    }

    #[tokio::test]
    async fn submit_before_declining_is_rejected() {
        let store = MockIntentionStore::new();
        let mut flow = DeclineFlow::new();

        let err = flow.submit(&store).await.unwrap_err();
        assert_eq!(
            err,
            FlowError::InvalidTransition {
                from: DeclineStep::Initial,
                action: "submit",
            }
        );
    }

    #[test]
    fn back_clears_name_and_message() {
        let mut flow = DeclineFlow::new();
        flow.choose_decline().unwrap();
        flow.set_name("Caio");

        assert_eq!(flow.back(), FlowOutcome::Stay(DeclineStep::Initial));
        assert_eq!(flow, DeclineFlow::default());
        assert!(flow.choose_attend().is_ok());
    }
}
