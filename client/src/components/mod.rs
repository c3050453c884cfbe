//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console surface while reading shared state from
//! Leptos context providers.

pub mod camera_feed;
pub mod notice_area;
pub mod sphere;
pub mod status_gem;
