//! Data transfer objects
//!
//! Reports produced by the services and rendered by the delivery layers
//! (Discord embeds, HTTP JSON), plus the mappers that build them.

pub mod mappers;
pub mod responses;

pub use responses::{
    HealthChecks, HealthResponse, NextTierEntry, ReadinessResponse, ResetReport, RoleStatus,
    StatsReport, TierCheckReport, TierProgressEntry, TrackingReport,
};
