pub mod chart_plot;
pub mod convergence_view;
pub mod horizon_view;

pub use convergence_view::ConvergenceView;
pub use horizon_view::HorizonView;
