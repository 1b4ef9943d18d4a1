//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls,
//! validation, and business rules.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code allocation, redirect
//!   accounting, deletion
//! - [`services::stats_service::StatsService`] - Read-only link statistics

pub mod services;
