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

//! Rendering policy handed to the SDK on every subscribe call.

use serde::{Deserialize, Serialize};

/// How the SDK fits a stream into its surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectMode {
    Original,
    FullFilled,
    LetterBox,
    #[default]
    PanAndScan,
}

/// Requested stream resolution. `Auto` lets the SDK pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "90p")]
    P90,
    #[serde(rename = "180p")]
    P180,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[default]
    #[serde(rename = "auto")]
    Auto,
}

/// Aspect mode and resolution used by one binding. Fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderPolicy {
    pub aspect_mode: AspectMode,
    pub resolution: Resolution,
}

impl RenderPolicy {
    pub fn with_aspect(aspect_mode: AspectMode) -> Self {
        Self {
            aspect_mode,
            ..Self::default()
        }
    }
}
