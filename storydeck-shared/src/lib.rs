#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared models and domain helpers for the Storydeck front end.
//!
//! Everything here is plain data plus pure functions so the web crate can
//! exercise its list filtering, favorite bookkeeping, and validation logic
//! without touching a DOM or a network.

pub mod models;
