//! RiskGauge - Investor risk profiling service.
//!
//! This crate converts loosely-structured questionnaire answers into a
//! deterministic risk score and profile label through a pure scoring
//! engine, wrapped in a thin submission/update/fetch HTTP surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
