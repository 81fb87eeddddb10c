//! # MINIAPP CORE LIBRARY
//!
//! **CLIENT-SIDE BUILDING BLOCKS FOR MINI APPS EMBEDDED IN A HOST MESSENGER**
//!
//! **ARCHITECTURE**: Table-driven init data parsing on top of a trait-based validation system
//! **GUARANTEE**: Fields the host did not send never appear in parsed output
//! **COMPATIBILITY**: Python FFI surface lives in `miniapp-bindings`

pub mod api;
pub mod config;
pub mod errors;
pub mod haptic;
pub mod init_data;
pub mod query;
pub mod safe_call;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;
