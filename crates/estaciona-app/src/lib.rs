//! Application services for estaciona
//!
//! Everything the two front ends share that is not persistence: config,
//! mail composition and dispatch, the two-step confirm gesture, duration
//! options, and avatar colors.

pub mod avatar;
pub mod config;
pub mod confirm;
pub mod duration;
pub mod mail;
