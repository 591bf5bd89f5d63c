//! Error-group selection: which chain of messages is relevant to the file
//! being viewed, and which of its messages the report should pre-select.
//!
//! A payload can carry many groups touching many files. Only one group is
//! presented per invocation:
//!
//! - A group whose *origin* message (index 0) is in the triggering file wins
//!   immediately — the problem starts in the file the developer is looking at.
//! - Failing that, the first group that merely *references* the file from a
//!   context message is used, with that context message pre-selected.
//! - If the file appears nowhere (or the check passed), nothing is shown.
//!
//! Groups carry no ranking signal beyond payload order, so discovery order is
//! the tie-break.

use crate::payload::{CheckPayload, RawMessage};

/// The messages to present for one invocation, in group order (origin first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Ordered messages of the selected group, or empty.
    pub messages: Vec<RawMessage>,
    /// Index of the message the report should pre-select.
    pub default_index: Option<usize>,
}

impl Resolution {
    /// A resolution with nothing to present.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            default_index: None,
        }
    }

    /// Returns `true` when there is nothing to present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Select the error group relevant to `triggering_file`.
///
/// Scans groups in payload order and messages in group order. The scan keeps
/// going past a context match in case a later group turns out to be an entry
/// error for the triggering file.
pub fn relevant_messages(payload: &CheckPayload, triggering_file: &str) -> Resolution {
    if payload.passed {
        return Resolution::empty();
    }

    let mut context_match: Option<(usize, usize)> = None;
    for (group_index, group) in payload.errors.iter().enumerate() {
        for (message_index, message) in group.messages.iter().enumerate() {
            if message.path != triggering_file {
                continue;
            }
            if message_index == 0 {
                // Entry error: the group originates in the triggering file.
                return Resolution {
                    messages: group.messages.clone(),
                    default_index: Some(0),
                };
            }
            if context_match.is_none() {
                context_match = Some((group_index, message_index));
            }
        }
    }

    match context_match {
        Some((group_index, message_index)) => Resolution {
            messages: payload.errors[group_index].messages.clone(),
            default_index: Some(message_index),
        },
        None => Resolution::empty(),
    }
}
