//! HTTP surface of SessionGate: routing, request DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
