// ABOUTME: Criterion benchmarks for the assessment evaluator
// ABOUTME: Measures the base and extended evaluation pipelines on a fixed profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

#![allow(missing_docs)]

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use vitalis_age_server::intelligence::AssessmentEvaluator;
use vitalis_age_server::models::AssessmentInput;

fn bench_input() -> AssessmentInput {
    AssessmentInput {
        birth_date: Some("1988-03-12".to_owned()),
        weight: 82.0,
        height: 178.0,
        exercise_frequency: 4.0,
        mental_activity: 3.0,
        sleep_hours: 7.5,
        stress_level: 6.0,
        diet_quality: 4.0,
        smoking: false,
        alcohol_frequency: 1.0,
    }
}

fn evaluator_benches(c: &mut Criterion) {
    let evaluator = AssessmentEvaluator::with_reference_date(
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date"),
    );
    let input = bench_input();

    c.bench_function("evaluate_base", |b| {
        b.iter(|| evaluator.evaluate(black_box(&input)));
    });

    c.bench_function("evaluate_extended", |b| {
        b.iter(|| evaluator.evaluate_extended(black_box(&input)));
    });
}

criterion_group!(benches, evaluator_benches);
criterion_main!(benches);
