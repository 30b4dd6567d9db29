//! Unit tests for the treehacks-canvas crate, run against recording SDK fakes.

pub mod fakes;
