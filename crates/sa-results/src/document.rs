//! Nested result mappings: strategy -> iteration count -> solution type -> values.

use crate::keys::{IterationCount, SolutionType, Strategy};
use crate::{ResultsError, ResultsResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Planning-horizon length, one value per year.
pub const HORIZON_YEARS: usize = 16;

/// One result document as written by the annealing study.
///
/// The same shape backs both `sa_resultados.json` (16 yearly values per leaf)
/// and `sa_vpl.json` (total VPL in the first element of each leaf).
/// Contents are kept as raw JSON; only the entries a lookup touches are checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyDocument {
    root: Map<String, Value>,
}

impl StudyDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a leaf sequence using raw keys.
    pub fn insert_series(
        &mut self,
        strategy: &str,
        iterations: &str,
        solution: &str,
        values: Vec<f64>,
    ) {
        let mut by_iteration = take_object(&mut self.root, strategy);
        let mut by_solution = take_object(&mut by_iteration, iterations);
        by_solution.insert(solution.to_string(), Value::from(values));
        by_iteration.insert(iterations.to_string(), Value::Object(by_solution));
        self.root
            .insert(strategy.to_string(), Value::Object(by_iteration));
    }

    /// Remove every leaf stored under `iterations` for `strategy`.
    pub fn remove_iterations(&mut self, strategy: &str, iterations: &str) -> bool {
        self.root
            .get_mut(strategy)
            .and_then(Value::as_object_mut)
            .map(|its| its.remove(iterations).is_some())
            .unwrap_or(false)
    }

    pub fn strategies(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn iteration_keys(&self, strategy: Strategy) -> Vec<&str> {
        self.root
            .get(strategy.key())
            .and_then(Value::as_object)
            .map(|its| its.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Raw leaf lookup. Fails on the first absent level.
    fn leaf(
        &self,
        strategy: Strategy,
        iterations: IterationCount,
        solution: SolutionType,
    ) -> ResultsResult<&[Value]> {
        let iteration_key = iterations.key();
        let by_iteration = self
            .root
            .get(strategy.key())
            .and_then(Value::as_object)
            .ok_or_else(|| ResultsError::MissingKey {
                path: strategy.key().to_string(),
            })?;
        let by_solution = by_iteration
            .get(&iteration_key)
            .and_then(Value::as_object)
            .ok_or_else(|| ResultsError::MissingKey {
                path: format!("{}/{}", strategy.key(), iteration_key),
            })?;
        let leaf = by_solution
            .get(solution.key())
            .ok_or_else(|| ResultsError::MissingKey {
                path: leaf_path(strategy, iterations, solution),
            })?;
        leaf.as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ResultsError::NotASequence {
                path: leaf_path(strategy, iterations, solution),
            })
    }

    /// Every value of a leaf as numbers.
    pub fn series(
        &self,
        strategy: Strategy,
        iterations: IterationCount,
        solution: SolutionType,
    ) -> ResultsResult<Vec<f64>> {
        let leaf = self.leaf(strategy, iterations, solution)?;
        leaf.iter()
            .enumerate()
            .map(|(index, value)| number_at(value, strategy, iterations, solution, index))
            .collect()
    }

    /// Yearly values over the planning horizon; exactly [`HORIZON_YEARS`] long.
    pub fn horizon(
        &self,
        strategy: Strategy,
        iterations: IterationCount,
        solution: SolutionType,
    ) -> ResultsResult<Vec<f64>> {
        let leaf = self.leaf(strategy, iterations, solution)?;
        if leaf.len() != HORIZON_YEARS {
            return Err(ResultsError::ShapeMismatch {
                path: leaf_path(strategy, iterations, solution),
                expected: HORIZON_YEARS,
                found: leaf.len(),
            });
        }
        self.series(strategy, iterations, solution)
    }

    /// Total VPL at an iteration count: the first element of the leaf.
    /// Later elements are never read.
    pub fn total_vpl(
        &self,
        strategy: Strategy,
        iterations: IterationCount,
        solution: SolutionType,
    ) -> ResultsResult<f64> {
        let first = self
            .leaf(strategy, iterations, solution)?
            .first()
            .ok_or_else(|| ResultsError::EmptySeries {
                path: leaf_path(strategy, iterations, solution),
            })?;
        number_at(first, strategy, iterations, solution, 0)
    }
}

/// Detach the object stored under `key`, or a fresh one if absent or not an object.
fn take_object(parent: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match parent.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn number_at(
    value: &Value,
    strategy: Strategy,
    iterations: IterationCount,
    solution: SolutionType,
    index: usize,
) -> ResultsResult<f64> {
    value.as_f64().ok_or_else(|| ResultsError::NotANumber {
        path: leaf_path(strategy, iterations, solution),
        index,
    })
}

fn leaf_path(strategy: Strategy, iterations: IterationCount, solution: SolutionType) -> String {
    format!("{}/{}/{}", strategy.key(), iterations.key(), solution.key())
}
