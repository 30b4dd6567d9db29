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

use std::fmt;

use crate::sdk::{CanvasId, SdkError};
use crate::surface::SurfaceId;

/// Represents the current state of a canvas binding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BindingState {
    /// Nothing subscribed. Initial and terminal state.
    #[default]
    Unbound,

    /// The surface is subscribed to a canvas
    Bound {
        canvas: CanvasId,
        surface: SurfaceId,
    },

    /// The last subscribe attempt was rejected by the SDK
    Failed {
        canvas: CanvasId,
        surface: SurfaceId,
        /// Outcome the SDK returned
        reason: SdkError,
    },
}

impl fmt::Display for BindingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingState::Unbound => write!(f, "Unbound"),
            BindingState::Bound { canvas, surface } => write!(f, "Bound ({canvas} -> {surface})"),
            BindingState::Failed {
                canvas,
                surface,
                reason,
            } => write!(f, "Failed ({canvas} -> {surface}): {reason}"),
        }
    }
}

impl BindingState {
    pub fn is_bound(&self) -> bool {
        matches!(self, BindingState::Bound { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BindingState::Failed { .. })
    }

    /// Canvas currently subscribed, if any
    pub fn bound_canvas(&self) -> Option<&CanvasId> {
        if let BindingState::Bound { canvas, .. } = self {
            Some(canvas)
        } else {
            None
        }
    }

    /// Rejection retained from the last failed subscribe
    pub fn rejection(&self) -> Option<&SdkError> {
        if let BindingState::Failed { reason, .. } = self {
            Some(reason)
        } else {
            None
        }
    }
}
