/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Outcomes and errors returned from [`CanvasBinding::update`](crate::CanvasBinding::update).

use std::fmt;

use thiserror::Error;

use crate::sdk::{CanvasKind, SdkError};

/// Why there was nothing to bind on this update.
///
/// Absence is an expected condition (no call yet, camera off, nobody
/// sharing) and is reported as a successful outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Absence {
    NoSession,
    NoParticipant,
    NoLocalParticipant,
    NoVideoCanvas,
    NoShareAction,
    NoShareCanvas,
    /// The SDK handed back a canvas of the other kind (video for share, or
    /// share for video).
    WrongCanvasKind,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Absence::NoSession => "no active session",
            Absence::NoParticipant => "no participant to render",
            Absence::NoLocalParticipant => "no local participant",
            Absence::NoVideoCanvas => "participant has no video canvas",
            Absence::NoShareAction => "participant is not sharing",
            Absence::NoShareCanvas => "share action has no canvas",
            Absence::WrongCanvasKind => "canvas kind does not match binding",
        };
        f.write_str(text)
    }
}

/// Successful result of an update cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A subscribe call succeeded during this update.
    Subscribed,
    /// Already bound to the same canvas on the same surface.
    Unchanged,
    /// Nothing to bind. Any previous subscription was released.
    Absent(Absence),
}

/// Errors returned by binding updates.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The SDK rejected the subscribe call. The binding is left `Failed` and
    /// the next update retries.
    #[error("{kind} subscribe rejected for {participant}: {reason}")]
    SubscriptionRejected {
        participant: String,
        kind: CanvasKind,
        reason: SdkError,
    },
}
