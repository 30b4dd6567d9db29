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

//! Rendering surfaces.
//!
//! A [`Surface`] stands in for the UI view a canvas is rendered into. The UI
//! layer owns its lifetime; bindings only attach and detach subscriptions to
//! it, keyed by its [`SurfaceId`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Fill painted behind the stream while nothing is attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    Black,
    DarkGray,
}

impl Background {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Background::Black => (0, 0, 0),
            Background::DarkGray => (85, 85, 85),
        }
    }
}

/// A UI-owned rendering target.
///
/// Cloning a surface clones the handle, not the view: both copies share the
/// same [`SurfaceId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    id: SurfaceId,
    background: Background,
}

impl Surface {
    pub fn new(background: Background) -> Self {
        Self {
            id: SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed)),
            background,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn background(&self) -> Background {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_get_distinct_ids() {
        let a = Surface::new(Background::Black);
        let b = Surface::new(Background::Black);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clone_keeps_identity() {
        let a = Surface::new(Background::DarkGray);
        let b = a.clone();
        assert_eq!(a.id(), b.id());
        assert_eq!(b.background(), Background::DarkGray);
    }

    #[test]
    fn background_colors() {
        assert_eq!(Background::Black.rgb(), (0, 0, 0));
        assert_eq!(Background::DarkGray.rgb(), (85, 85, 85));
    }
}
