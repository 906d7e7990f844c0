//! Rail network journey planner and fare calculator.
//!
//! Stations are grouped into regions, some flagged as hubs. Journeys
//! between regions are routed through the closest hub at each end and
//! priced leg by leg.

pub mod config;
pub mod domain;
pub mod fare;
pub mod loader;
pub mod network;
pub mod web;
