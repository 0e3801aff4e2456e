//! Common types and utilities for phone-seed populators.
//!
//! This crate provides the argument types shared by the populate and
//! verify commands so both regenerate the same batch from the same flags.

pub mod args;

pub use args::CommonPopulateArgs;
