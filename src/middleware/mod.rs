// ABOUTME: HTTP middleware module organization
// ABOUTME: Cross-cutting request handling applied at router composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! HTTP middleware for the Vitalis age server.

/// CORS configuration for browser clients
pub mod cors;

pub use cors::setup_cors;
