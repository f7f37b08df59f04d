//! Core library components.
//!
//! The store, its on-disk layout, and the encryption and version-control
//! backends it delegates to. Nothing in here prints.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod generator;
pub mod recipient;
pub mod store;
pub mod types;
pub mod vcs;
