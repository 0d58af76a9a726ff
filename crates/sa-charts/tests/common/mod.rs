#![allow(dead_code)]

use sa_results::{IterationCount, SolutionType, Strategy, StudyDocument};

/// Horizon document with every strategy/iteration/solution leaf filled.
pub fn full_horizon_document() -> StudyDocument {
    let mut doc = StudyDocument::new();
    for (s, strategy) in Strategy::ALL.iter().enumerate() {
        for iterations in IterationCount::FIXED {
            for solution in SolutionType::ALL {
                let base = 140_000.0 + s as f64 * 5_000.0 + iterations.get() as f64 / 10.0;
                let values = (0..16).map(|year| base + year as f64 * 100.0).collect();
                doc.insert_series(strategy.key(), &iterations.key(), solution.key(), values);
            }
        }
    }
    doc
}

/// VPL document whose first element encodes strategy and iteration count.
pub fn full_vpl_document() -> StudyDocument {
    let mut doc = StudyDocument::new();
    for (s, strategy) in Strategy::ALL.iter().enumerate() {
        for iterations in IterationCount::FIXED {
            for (k, solution) in SolutionType::ALL.iter().enumerate() {
                let total = 2_000_000.0 + s as f64 * 1_000.0 + k as f64 * 10.0
                    + iterations.get() as f64;
                doc.insert_series(
                    strategy.key(),
                    &iterations.key(),
                    solution.key(),
                    vec![total, -1.0, -2.0],
                );
            }
        }
    }
    doc
}
