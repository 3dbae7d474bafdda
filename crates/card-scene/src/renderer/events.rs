//! Host events against the last rendered pass.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::bindings::NodeBinding;
use super::core::CardRenderer;
use crate::form::FormKey;
use crate::submit::{Submission, SubmissionSink, SubmitAck};

/// Input from the host, addressed by node id.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// New value for an input-capable leaf.
    Change { node_id: String, value: Value },
    /// Activation of a button.
    Click { node_id: String },
}

impl UiEvent {
    pub fn change(node_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Change {
            node_id: node_id.into(),
            value: value.into(),
        }
    }

    pub fn click(node_id: impl Into<String>) -> Self {
        Self::Click {
            node_id: node_id.into(),
        }
    }

    pub fn node_id(&self) -> &str {
        match self {
            Self::Change { node_id, .. } | Self::Click { node_id } => node_id,
        }
    }
}

/// Result of event handling.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was not consumed.
    Ignored,
    /// A form field took the new value; re-render to see it.
    FieldUpdated { form: FormKey, field: String },
    /// A button was activated.
    Clicked {
        intent: Option<String>,
        /// Set when the click submitted a form.
        submission: Option<SubmitAck>,
    },
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// A submitting click replaces the host's default navigation.
    pub fn default_prevented(&self) -> bool {
        matches!(
            self,
            Self::Clicked {
                submission: Some(_),
                ..
            }
        )
    }
}

impl CardRenderer {
    /// Apply `event` to the state behind the last pass.
    ///
    /// Form submissions are handed to `sink`; a sink error is logged and the
    /// click still counts as handled.
    pub fn handle_event(&mut self, event: &UiEvent, sink: &mut dyn SubmissionSink) -> EventResult {
        let Some(binding) = self.bindings.get(event.node_id()).cloned() else {
            debug!(node_id = event.node_id(), "event for unknown node");
            return EventResult::Ignored;
        };

        match (event, binding) {
            (UiEvent::Change { value, .. }, NodeBinding::Field(Some(field))) => {
                if self
                    .forms
                    .write_field(Some(&field.form), Some(&field.field), value.clone())
                {
                    EventResult::FieldUpdated {
                        form: field.form,
                        field: field.field,
                    }
                } else {
                    EventResult::Ignored
                }
            }
            (UiEvent::Change { node_id, .. }, NodeBinding::Field(None)) => {
                debug!(%node_id, "change on unbound field dropped");
                EventResult::Ignored
            }
            (UiEvent::Click { .. }, NodeBinding::Button { submit, intent }) => {
                let Some(target) = submit else {
                    return match intent {
                        Some(intent) => EventResult::Clicked {
                            intent: Some(intent),
                            submission: None,
                        },
                        None => EventResult::Ignored,
                    };
                };

                let values = self
                    .forms
                    .store(&target.form)
                    .map(|store| store.snapshot())
                    .unwrap_or_default();
                let submission = Submission {
                    destination: target.destination,
                    values,
                };
                if let Err(err) = sink.submit(&submission) {
                    warn!(form = %target.form, error = %err, "submission sink failed");
                }
                let ack = SubmitAck::for_submission(&submission);
                info!(form = %target.form, "{}", ack.message);
                EventResult::Clicked {
                    intent,
                    submission: Some(ack),
                }
            }
            _ => EventResult::Ignored,
        }
    }
}
