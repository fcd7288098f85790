//! Holocron CLI Library
//!
//! This module exposes the cache, CLI, data, search, and chart modules for
//! use in integration tests.

pub mod cache;
pub mod chart;
pub mod cli;
pub mod data;
pub mod search;
