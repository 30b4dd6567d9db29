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

//! Target resolution strategies and the three binding flavors built on them.

use std::rc::Rc;

use crate::binding::{CanvasBinding, ResolveTarget, ResolvedTarget};
use crate::error::{Absence, BindingError, UpdateOutcome};
use crate::policy::{AspectMode, RenderPolicy};
use crate::sdk::{participant_label, CanvasKind, Participant};
use crate::session::SessionContext;
use crate::surface::{Background, Surface};

/// Renders a given participant's camera.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteVideo;

impl ResolveTarget for RemoteVideo {
    type Target<'a> = Option<&'a dyn Participant>;

    const KIND: CanvasKind = CanvasKind::Video;
    const LABEL: &'static str = "remote video";

    fn resolve(
        &self,
        _context: &dyn SessionContext,
        participant: Self::Target<'_>,
    ) -> Result<ResolvedTarget, Absence> {
        let participant = participant.ok_or(Absence::NoParticipant)?;
        let canvas = participant.video_canvas().ok_or(Absence::NoVideoCanvas)?;
        Ok(ResolvedTarget {
            canvas,
            participant: participant_label(participant),
        })
    }
}

/// Renders the local participant's own camera, looked up from the session
/// on every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalVideo;

impl ResolveTarget for LocalVideo {
    type Target<'a> = ();

    const KIND: CanvasKind = CanvasKind::Video;
    const LABEL: &'static str = "local video";

    fn background(&self) -> Background {
        Background::DarkGray
    }

    fn resolve(
        &self,
        context: &dyn SessionContext,
        _target: (),
    ) -> Result<ResolvedTarget, Absence> {
        let me = context
            .local_participant()
            .ok_or(Absence::NoLocalParticipant)?;
        let canvas = me.video_canvas().ok_or(Absence::NoVideoCanvas)?;
        Ok(ResolvedTarget {
            canvas,
            participant: participant_label(&*me),
        })
    }
}

/// Renders the first share action a participant offers.
///
/// "First" is the order the SDK reports. When several shares are active at
/// once the SDK does not promise a stable order, so callers should not rely
/// on which one wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct Share;

impl ResolveTarget for Share {
    type Target<'a> = Option<&'a dyn Participant>;

    const KIND: CanvasKind = CanvasKind::Share;
    const LABEL: &'static str = "share";

    fn resolve(
        &self,
        _context: &dyn SessionContext,
        participant: Self::Target<'_>,
    ) -> Result<ResolvedTarget, Absence> {
        let participant = participant.ok_or(Absence::NoParticipant)?;
        let first = participant
            .share_actions()
            .into_iter()
            .next()
            .ok_or(Absence::NoShareAction)?;
        let canvas = first.share_canvas().ok_or(Absence::NoShareCanvas)?;
        Ok(ResolvedTarget {
            canvas,
            participant: participant_label(participant),
        })
    }
}

pub type RemoteVideoBinding = CanvasBinding<RemoteVideo>;
pub type LocalVideoBinding = CanvasBinding<LocalVideo>;
pub type ShareBinding = CanvasBinding<Share>;

impl CanvasBinding<RemoteVideo> {
    /// Remote video binding with the default pan-and-scan policy.
    pub fn new(context: Rc<dyn SessionContext>) -> Self {
        Self::with_aspect(context, AspectMode::default())
    }

    pub fn with_aspect(context: Rc<dyn SessionContext>, aspect_mode: AspectMode) -> Self {
        Self::with_policy(context, RemoteVideo, RenderPolicy::with_aspect(aspect_mode))
    }
}

impl CanvasBinding<LocalVideo> {
    pub fn new(context: Rc<dyn SessionContext>) -> Self {
        Self::with_policy(context, LocalVideo, RenderPolicy::default())
    }

    /// Shorthand for `update((), surface)`.
    pub fn refresh(&mut self, surface: &Surface) -> Result<UpdateOutcome, BindingError> {
        self.update((), surface)
    }
}

impl CanvasBinding<Share> {
    pub fn new(context: Rc<dyn SessionContext>) -> Self {
        Self::with_policy(context, Share, RenderPolicy::default())
    }
}
