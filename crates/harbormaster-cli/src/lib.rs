//! Harbormaster CLI library.
//!
//! This crate provides command-line interface utilities for the Harbormaster
//! cargo model, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
