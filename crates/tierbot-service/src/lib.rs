//! # tierbot-service
//!
//! Application layer: serialized ledger mutations, tier resolution, role
//! reconciliation and the report DTOs the delivery layers render.

pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, ReadinessResponse, ResetReport, StatsReport, TierCheckReport, TrackingReport,
};
pub use services::{
    LedgerService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatsService, TierService,
};
