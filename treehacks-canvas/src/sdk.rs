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

//! Traits describing the parts of the video SDK the binding layer talks to.
//!
//! The SDK owns sessions, participants and canvases. This crate never
//! constructs any of them; it only holds `Rc` handles for the duration of an
//! update cycle (or, for a bound canvas, until the subscription is released).
//! Host applications wrap their SDK objects in these traits.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::policy::{AspectMode, Resolution};
use crate::surface::Surface;

/// Stable identity of a canvas, used to detect "same canvas, same surface".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasId(String);

impl CanvasId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a call participant as reported by the SDK.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which media stream a canvas carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CanvasKind {
    Video,
    Share,
}

impl fmt::Display for CanvasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasKind::Video => write!(f, "video"),
            CanvasKind::Share => write!(f, "share"),
        }
    }
}

/// Failure outcome reported by the SDK for a subscribe or unsubscribe call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (code {code})")]
pub struct SdkError {
    pub code: u32,
    pub message: String,
}

impl SdkError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A subscribable media source belonging to one participant.
pub trait Canvas: fmt::Debug {
    fn id(&self) -> CanvasId;

    fn kind(&self) -> CanvasKind;

    /// Start rendering this canvas into `surface`.
    fn subscribe(
        &self,
        surface: &Surface,
        aspect_mode: AspectMode,
        resolution: Resolution,
    ) -> Result<(), SdkError>;

    /// Stop rendering this canvas into `surface`.
    fn unsubscribe(&self, surface: &Surface) -> Result<(), SdkError>;
}

/// One active screen-share stream offered by a participant.
pub trait ShareAction: fmt::Debug {
    fn share_canvas(&self) -> Option<Rc<dyn Canvas>>;
}

/// A call member, local or remote.
pub trait Participant: fmt::Debug {
    fn id(&self) -> ParticipantId;

    /// Display name, used only for diagnostics.
    fn name(&self) -> Option<String> {
        None
    }

    fn video_canvas(&self) -> Option<Rc<dyn Canvas>>;

    /// Share actions in the order the SDK reports them. May be empty.
    fn share_actions(&self) -> Vec<Rc<dyn ShareAction>>;
}

/// Handle to a connected call.
pub trait Session: fmt::Debug {
    fn local_participant(&self) -> Option<Rc<dyn Participant>>;
}

/// Human-readable label for a participant: the display name when the SDK has
/// one, the id otherwise.
pub fn participant_label(participant: &dyn Participant) -> String {
    participant
        .name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| participant.id().to_string())
}
