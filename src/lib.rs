//! Rewards Estimation Engine for a housing rewards card
//!
//! This crate provides functionality for estimating the rewards outcome of a
//! card tier, housing payment elections and categorized card spend: points
//! earned, reward-cash flow, and out-of-pocket fees.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod share;
