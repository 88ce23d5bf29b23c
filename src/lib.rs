//! crypto-karo: live INR crypto prices with a keyword-driven advisor
//!
//! This library provides the core components for:
//! - A CORS-restricted relay over the CoinGecko spot price API
//! - Derived market statistics (synthetic or CoinGecko-backed)
//! - Rule-based buy/sell recommendations
//! - Chat intent classification and reply composition
//! - A polling terminal dashboard with an immutable view-model
//! - Structured logging and Prometheus metrics

pub mod advisor;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod market;
pub mod relay;
pub mod stats;
pub mod telemetry;
