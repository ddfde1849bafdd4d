// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification dispatch.
//!
//! Events are delivered sequentially and in isolation: a failure for one
//! recipient is logged and swallowed, the remaining recipients are still
//! attempted, and the triggering mutation is never rolled back or reported
//! as failed because of delivery problems.

use staff_cover_events::{NotificationError, NotificationEvent, NotificationSink};
use tracing::{info, warn};

/// Delivers a batch of events, returning how many were delivered.
#[must_use]
pub fn dispatch_notifications(
    sink: &dyn NotificationSink,
    events: &[NotificationEvent],
) -> u32 {
    let mut delivered: u32 = 0;
    for event in events {
        match sink.deliver(event) {
            Ok(()) => delivered += 1,
            Err(e) => {
                warn!(
                    recipient = %event.recipient(),
                    kind = event.kind(),
                    error = %e,
                    "notification delivery failed"
                );
            }
        }
    }
    delivered
}

/// A sink that writes notifications to the structured log.
///
/// The default transport for deployments where delivery is handled by a log
/// shipper or where no outbound channel is wired up yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn deliver(&self, event: &NotificationEvent) -> Result<(), NotificationError> {
        info!(
            recipient = %event.recipient(),
            kind = event.kind(),
            "notification: {event}"
        );
        Ok(())
    }
}
