//! Metro route planning server.
//!
//! A web application that answers: "what is the fastest, cheapest, or
//! least-hassle way between these two stations?" over a bidirectional
//! rail network.

pub mod datasource;
pub mod domain;
pub mod favorites;
pub mod network;
pub mod planner;
pub mod web;
