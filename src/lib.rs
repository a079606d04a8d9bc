//! WxPusher notifications for 双色球 (SSQ) lottery analysis
//!
//! Formats analysis and verification results into WeChat push messages and
//! delivers them through the WxPusher HTTP API.
//!
//! ## Pipeline
//!
//! ```text
//! Report file → Extractor → Composer → Pusher → WxPusher API
//!                              ↑
//!            Caller-supplied data (recommendations, pools, backtest)
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pusher;
pub mod types;

#[cfg(test)]
mod types_tests;
