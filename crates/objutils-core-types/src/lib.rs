//! Core types shared across objutils facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: operation lifecycle events

pub mod schema;
