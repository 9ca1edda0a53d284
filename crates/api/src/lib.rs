//! HTTP API: server, routing, identity propagation and access guards.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
