//! Routeplan Core Library
//!
//! Route planning over a directed road graph whose edge weights are
//! adjusted for predicted traffic.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod planner;
pub mod snapshot;
pub mod traffic;
