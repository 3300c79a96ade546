//! Ticket Frontend - Rust Implementation
//!
//! Presentation layer of the ticketing web application.
//!
//! This library provides:
//! - Web UI (Dioxus): event listings, navigation chrome, and the seven-step
//!   event-creation wizard gated by [`event_wizard`]
//! - A small HTTP API that re-checks wizard snapshots with a configurable policy

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
