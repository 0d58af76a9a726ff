//! Page composition service for the annealing dashboard.
//!
//! This crate is shared by the GUI and CLI frontends: it resolves the input
//! files, loads both documents, builds the four charts and turns every failure
//! into one of the two user-facing error kinds.

pub mod dashboard;
pub mod error;
pub mod page;
pub mod source;

pub use dashboard::{Dashboard, Study, build_convergence_charts, build_horizon_charts, load_study};
pub use error::{AppError, AppResult};
pub use page::DashboardTab;
pub use source::DataSource;
