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

//! The canvas binding state machine.
//!
//! A [`CanvasBinding`] ties at most one canvas to one surface at a time. The
//! UI layer calls [`CanvasBinding::update`] on every lifecycle event and
//! [`CanvasBinding::teardown`] once when the view goes away. Which canvas to
//! bind is decided by a [`ResolveTarget`] strategy; see [`crate::targets`].

use std::rc::Rc;

use log::{debug, info, trace, warn};

use crate::error::{Absence, BindingError, UpdateOutcome};
use crate::policy::RenderPolicy;
use crate::sdk::{Canvas, CanvasId, CanvasKind};
use crate::session::SessionContext;
use crate::state::BindingState;
use crate::surface::{Background, Surface};

/// A canvas picked by a [`ResolveTarget`] strategy, along with a label for
/// its owner used in diagnostics.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub canvas: Rc<dyn Canvas>,
    pub participant: String,
}

/// Strategy that decides which canvas a binding should render.
pub trait ResolveTarget {
    /// What the UI hands to `update` each cycle.
    type Target<'a>;

    const KIND: CanvasKind;

    /// Short name used in log lines, e.g. `"remote video"`.
    const LABEL: &'static str;

    /// Fill used by surfaces made for this kind of binding.
    fn background(&self) -> Background {
        Background::Black
    }

    fn resolve(
        &self,
        context: &dyn SessionContext,
        target: Self::Target<'_>,
    ) -> Result<ResolvedTarget, Absence>;
}

#[derive(Debug)]
struct ActiveSubscription {
    canvas: Rc<dyn Canvas>,
    canvas_id: CanvasId,
    surface: Surface,
    participant: String,
}

/// Binds one resolved canvas to one surface.
///
/// Invariants:
/// - at most one subscription is held at a time, and the previous one is
///   always released before a new subscribe is issued;
/// - no subscription is held while there is no active session;
/// - repeated updates with the same canvas and surface do not re-subscribe.
#[derive(Debug)]
pub struct CanvasBinding<R: ResolveTarget> {
    context: Rc<dyn SessionContext>,
    resolver: R,
    policy: RenderPolicy,
    state: BindingState,
    active: Option<ActiveSubscription>,
}

impl<R: ResolveTarget> CanvasBinding<R> {
    pub fn with_policy(context: Rc<dyn SessionContext>, resolver: R, policy: RenderPolicy) -> Self {
        Self {
            context,
            resolver,
            policy,
            state: BindingState::Unbound,
            active: None,
        }
    }

    pub fn state(&self) -> &BindingState {
        &self.state
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    pub fn kind(&self) -> CanvasKind {
        R::KIND
    }

    /// Surface currently holding a subscription, if any.
    pub fn bound_surface(&self) -> Option<&Surface> {
        self.active.as_ref().map(|active| &active.surface)
    }

    /// Create a fresh surface for this binding, painted with its background.
    pub fn make_surface(&self) -> Surface {
        Surface::new(self.resolver.background())
    }

    /// Reconcile the binding with the current session, target and surface.
    ///
    /// Absence of a session, participant or canvas releases any held
    /// subscription and returns [`UpdateOutcome::Absent`]. A rejected
    /// subscribe leaves the binding `Failed`; the next call retries.
    pub fn update(
        &mut self,
        target: R::Target<'_>,
        surface: &Surface,
    ) -> Result<UpdateOutcome, BindingError> {
        if self.context.active_session().is_none() {
            return Ok(self.settle_absent(Absence::NoSession));
        }

        let resolved = match self.resolver.resolve(&*self.context, target) {
            Ok(resolved) => resolved,
            Err(absence) => return Ok(self.settle_absent(absence)),
        };

        let kind = resolved.canvas.kind();
        if kind != R::KIND {
            warn!(
                "{}: {} of {} is a {} canvas, refusing to bind",
                R::LABEL,
                resolved.canvas.id(),
                resolved.participant,
                kind
            );
            return Ok(self.settle_absent(Absence::WrongCanvasKind));
        }

        let canvas_id = resolved.canvas.id();
        if let Some(active) = &self.active {
            if active.canvas_id == canvas_id && active.surface.id() == surface.id() {
                trace!("{}: {} already bound to {}", R::LABEL, canvas_id, surface.id());
                return Ok(UpdateOutcome::Unchanged);
            }
        }

        self.release();

        match resolved
            .canvas
            .subscribe(surface, self.policy.aspect_mode, self.policy.resolution)
        {
            Ok(()) => {
                info!(
                    "{}: subscribed {} of {} to {}",
                    R::LABEL,
                    canvas_id,
                    resolved.participant,
                    surface.id()
                );
                self.state = BindingState::Bound {
                    canvas: canvas_id.clone(),
                    surface: surface.id(),
                };
                self.active = Some(ActiveSubscription {
                    canvas: resolved.canvas,
                    canvas_id,
                    surface: surface.clone(),
                    participant: resolved.participant,
                });
                Ok(UpdateOutcome::Subscribed)
            }
            Err(reason) => {
                warn!(
                    "{}: subscribe of {} for {} rejected: {}",
                    R::LABEL,
                    canvas_id,
                    resolved.participant,
                    reason
                );
                self.state = BindingState::Failed {
                    canvas: canvas_id,
                    surface: surface.id(),
                    reason: reason.clone(),
                };
                Err(BindingError::SubscriptionRejected {
                    participant: resolved.participant,
                    kind: R::KIND,
                    reason,
                })
            }
        }
    }

    /// Release any subscription and return to `Unbound`. Must be called when
    /// the owning view is destroyed.
    pub fn teardown(&mut self) {
        debug!("{}: teardown in state {}", R::LABEL, self.state);
        self.release();
    }

    fn settle_absent(&mut self, absence: Absence) -> UpdateOutcome {
        debug!("{}: nothing to bind, {}", R::LABEL, absence);
        self.release();
        UpdateOutcome::Absent(absence)
    }

    fn release(&mut self) {
        if let Some(active) = self.active.take() {
            match active.canvas.unsubscribe(&active.surface) {
                Ok(()) => debug!(
                    "{}: unsubscribed {} of {} from {}",
                    R::LABEL,
                    active.canvas_id,
                    active.participant,
                    active.surface.id()
                ),
                // The subscription is considered gone either way.
                Err(err) => warn!(
                    "{}: unsubscribe of {} from {} failed: {}",
                    R::LABEL,
                    active.canvas_id,
                    active.surface.id(),
                    err
                ),
            }
        }
        self.state = BindingState::Unbound;
    }
}

impl<R: ResolveTarget> Drop for CanvasBinding<R> {
    fn drop(&mut self) {
        if self.active.is_some() {
            warn!("{}: dropped without teardown, releasing", R::LABEL);
            self.release();
        }
    }
}
