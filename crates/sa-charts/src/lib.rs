//! sa-charts: chart descriptions built from the annealing result documents.
//!
//! Builders are pure: they index into a [`StudyDocument`](sa_results::StudyDocument)
//! and return a [`ChartSpec`] that any rendering surface can draw.

pub mod convergence;
pub mod horizon;
pub mod model;
pub mod palette;

pub use convergence::convergence_chart;
pub use horizon::{LIMIT_LINES, horizon_chart};
pub use model::*;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Lookup(#[from] sa_results::ResultsError),
}
