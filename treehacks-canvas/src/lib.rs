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

//! Media canvas binding for the treehacks call client.
//!
//! This crate attaches a participant's video or screen-share canvas to a
//! rendering surface owned by the UI, and keeps that attachment correct as
//! participants, sessions and views come and go. It makes no assumptions
//! about the UI toolkit or the video SDK: both are reached through the traits
//! in [`sdk`] and [`SessionContext`].
//!
//! # Outline of usage
//!
//! ```ignore
//! let context: Rc<dyn SessionContext> = Rc::new(SessionSlot::new());
//!
//! // Remote participant's camera
//! let mut remote = RemoteVideoBinding::new(context.clone());
//! let surface = remote.make_surface();
//! remote.update(Some(&*participant), &surface)?;
//!
//! // Own camera preview
//! let mut preview = LocalVideoBinding::new(context.clone());
//! let preview_surface = preview.make_surface();
//! preview.refresh(&preview_surface)?;
//!
//! // Screen share
//! let mut share = ShareBinding::new(context);
//! let share_surface = share.make_surface();
//! share.update(Some(&*participant), &share_surface)?;
//!
//! // When the views are destroyed
//! remote.teardown();
//! preview.teardown();
//! share.teardown();
//! ```

mod binding;
mod error;
mod policy;
pub mod sdk;
mod session;
mod state;
mod surface;
mod targets;

#[cfg(test)]
mod tests;

pub use binding::{CanvasBinding, ResolveTarget, ResolvedTarget};
pub use error::{Absence, BindingError, UpdateOutcome};
pub use policy::{AspectMode, RenderPolicy, Resolution};
pub use sdk::{
    Canvas, CanvasId, CanvasKind, Participant, ParticipantId, SdkError, Session, ShareAction,
};
pub use session::{SessionContext, SessionSlot};
pub use state::BindingState;
pub use surface::{Background, Surface, SurfaceId};
pub use targets::{
    LocalVideo, LocalVideoBinding, RemoteVideo, RemoteVideoBinding, Share, ShareBinding,
};
