// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Notification events emitted by the coverage core.
//!
//! Mutations that owe someone a message emit a [`NotificationEvent`] to a
//! [`NotificationSink`] after the data change has committed. Delivery is
//! fire-and-forget relative to the mutation: a sink failure for one recipient
//! must never roll back the change or prevent the remaining recipients from
//! being notified. That rule is enforced by the dispatching layer; this crate
//! only defines the boundary.

use staff_cover_domain::{MonthKey, UserId, format_date};
use std::sync::Mutex;
use time::Date;

#[cfg(test)]
mod tests;

/// A message the system owes a user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A batch of the user's assignments was confirmed.
    AssignmentsConfirmed {
        /// The user whose assignments were confirmed.
        user_id: UserId,
        /// The confirmed dates, sorted ascending.
        dates: Vec<Date>,
    },
    /// The user's availability for a month was cleared by an operator.
    AvailabilityCleared {
        /// The user whose availability was removed.
        user_id: UserId,
        /// The cleared month.
        month: MonthKey,
    },
}

impl NotificationEvent {
    /// Returns the event kind as a stable string.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AssignmentsConfirmed { .. } => "assignments_confirmed",
            Self::AvailabilityCleared { .. } => "availability_cleared",
        }
    }

    /// Returns the recipient of the event.
    #[must_use]
    pub const fn recipient(&self) -> &UserId {
        match self {
            Self::AssignmentsConfirmed { user_id, .. }
            | Self::AvailabilityCleared { user_id, .. } => user_id,
        }
    }
}

impl std::fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignmentsConfirmed { user_id, dates } => {
                let formatted: Vec<String> = dates.iter().copied().map(format_date).collect();
                write!(
                    f,
                    "assignments confirmed for {user_id}: {}",
                    formatted.join(", ")
                )
            }
            Self::AvailabilityCleared { user_id, month } => {
                write!(f, "availability cleared for {user_id} in {month}")
            }
        }
    }
}

/// An error delivering a notification.
///
/// Always non-fatal for the operation that emitted the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationError {
    /// The recipient whose delivery failed.
    pub recipient: UserId,
    /// A description of the failure.
    pub message: String,
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Notification to {} failed: {}",
            self.recipient, self.message
        )
    }
}

impl std::error::Error for NotificationError {}

/// The outbound notification transport.
///
/// Implementations deliver one event to its recipient. They must not retry
/// internally on behalf of the caller; the caller treats any `Err` as a
/// logged-and-dropped delivery.
pub trait NotificationSink {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be handed to the transport.
    fn deliver(&self, event: &NotificationEvent) -> Result<(), NotificationError>;
}

/// An in-memory sink that records every delivery attempt.
///
/// Used by tests to assert on emitted events. Recipients listed via
/// [`RecordingSink::failing_for`] still have their attempts recorded but
/// produce a delivery error, which lets tests exercise failure isolation.
#[derive(Debug, Default)]
pub struct RecordingSink {
    attempted: Mutex<Vec<NotificationEvent>>,
    failing: Vec<UserId>,
}

impl RecordingSink {
    /// Creates a sink that accepts every delivery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that fails delivery for the listed recipients.
    #[must_use]
    pub fn failing_for(failing: Vec<UserId>) -> Self {
        Self {
            attempted: Mutex::new(Vec::new()),
            failing,
        }
    }

    /// Returns every attempted delivery, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn attempted(&self) -> Vec<NotificationEvent> {
        self.attempted.lock().unwrap().clone()
    }

    /// Returns the attempts that would have been delivered successfully.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn delivered(&self) -> Vec<NotificationEvent> {
        self.attempted
            .lock()
            .unwrap()
            .iter()
            .filter(|event| !self.failing.contains(event.recipient()))
            .cloned()
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn deliver(&self, event: &NotificationEvent) -> Result<(), NotificationError> {
        self.attempted
            .lock()
            .map_err(|_| NotificationError {
                recipient: event.recipient().clone(),
                message: String::from("recording sink lock poisoned"),
            })?
            .push(event.clone());
        if self.failing.contains(event.recipient()) {
            return Err(NotificationError {
                recipient: event.recipient().clone(),
                message: String::from("simulated delivery failure"),
            });
        }
        Ok(())
    }
}
