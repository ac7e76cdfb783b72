//! Mingus Assessment - Readiness Scoring and Progressive Access Engine
//!
//! This crate implements the assessment scoring model, the three-tier
//! progressive access policy, and the risk forecasting layer for the
//! Mingus financial wellness platform. Persistence and any HTTP surface
//! are external collaborators behind the `ports` traits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
