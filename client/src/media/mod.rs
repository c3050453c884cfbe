//! Device media capture.

pub mod camera;
