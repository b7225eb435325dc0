//! Scoreboard - numbers and grades REST API
//!
//! Stores integers and class grades in PostgreSQL and serves two derived
//! views: sums of adjacent numbers, and per-class grade statistics with rank.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
