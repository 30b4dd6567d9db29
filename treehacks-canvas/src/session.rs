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

//! Read-only view of the current call session.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::sdk::{Participant, Session};

/// Answers "is a call active" and "who is the local participant".
///
/// Both queries are side-effect free. `None` is the normal answer when no call
/// is in progress and is never treated as an error.
pub trait SessionContext: fmt::Debug {
    fn active_session(&self) -> Option<Rc<dyn Session>>;

    /// The local participant of the active session, if any.
    fn local_participant(&self) -> Option<Rc<dyn Participant>> {
        self.active_session()
            .and_then(|session| session.local_participant())
    }
}

/// A [`SessionContext`] backed by a single slot that the host application
/// fills on join and clears on leave.
///
/// Share one instance between all bindings via `Rc`.
#[derive(Debug, Default)]
pub struct SessionSlot {
    session: RefCell<Option<Rc<dyn Session>>>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&self, session: Rc<dyn Session>) {
        debug!("session joined");
        *self.session.borrow_mut() = Some(session);
    }

    pub fn leave(&self) {
        if self.session.borrow_mut().take().is_some() {
            debug!("session left");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.borrow().is_some()
    }
}

impl SessionContext for SessionSlot {
    fn active_session(&self) -> Option<Rc<dyn Session>> {
        self.session.borrow().clone()
    }
}
