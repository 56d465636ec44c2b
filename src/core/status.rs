//! Controller status block

use std::collections::VecDeque;

use raven_view_types::{SoftwareMode, StatusSnapshot, Substate};

use super::decoder::StatusFields;

/// Latest controller time, mode and substate plus a short message log
#[derive(Debug, Clone)]
pub struct StatusState {
    controller_time_ms: Option<f64>,
    mode: Option<SoftwareMode>,
    substate: Option<Substate>,
    messages: VecDeque<String>,
    message_capacity: usize,
}

impl StatusState {
    pub fn new(message_capacity: usize) -> Self {
        Self {
            controller_time_ms: None,
            mode: None,
            substate: None,
            messages: VecDeque::with_capacity(message_capacity),
            message_capacity,
        }
    }

    /// Take over whatever the row carried. Fields the row did not decode
    /// (unknown codes, unmapped columns) keep their previous value.
    pub fn update(&mut self, fields: &StatusFields) {
        if fields.controller_time_ms.is_some() {
            self.controller_time_ms = fields.controller_time_ms;
        }
        if fields.mode.is_some() {
            self.mode = fields.mode;
        }
        if fields.substate.is_some() {
            self.substate = fields.substate;
        }
        if let Some(message) = &fields.message {
            self.push_message(message.clone());
        }
    }

    fn push_message(&mut self, message: String) {
        if self.message_capacity == 0 {
            return;
        }
        if self.messages.len() == self.message_capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn mode(&self) -> Option<SoftwareMode> {
        self.mode
    }

    pub fn substate(&self) -> Option<Substate> {
        self.substate
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            controller_time_ms: self.controller_time_ms,
            mode: self.mode,
            substate: self.substate,
            messages: self.messages.iter().cloned().collect(),
        }
    }
}
