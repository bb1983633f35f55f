// ABOUTME: Shared test helper module exports
// ABOUTME: HTTP testing utilities used across integration test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

#![allow(dead_code)]

pub mod axum_test;
