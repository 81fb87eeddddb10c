//! # INIT DATA
//!
//! **PURPOSE**: Turns the launch payload a host passes to a mini app into
//! typed `InitData`.
//!
//! The payload arrives as a query string (`auth_date=...&hash=...&user=...`)
//! where `chat`, `user` and `receiver` carry JSON objects. Parsing runs in
//! two steps: query decoding into `RawInitData`, then the field tables in
//! [`schema`] rename snake_case keys to camelCase and check the two required
//! fields (`auth_date`, `hash`).
//!
//! `hash` and `signature` are passed through as-is; nothing here verifies them.

pub mod parser;
pub mod schema;
pub mod types;

pub use parser::{parse, parse_bytes, parse_query, parse_query_with, parse_with};
pub use types::{Chat, InitData, RawInitData, User};
