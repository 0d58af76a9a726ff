//! Dashboard state: loaded documents plus the charts currently on display.

use crate::error::{AppError, AppResult};
use crate::page::STACK_ORDER;
use crate::source::DataSource;
use sa_charts::{ChartSpec, convergence_chart, horizon_chart};
use sa_results::{IterationCount, StudyDocument, load_document};

/// Both result documents of one study.
#[derive(Debug, Clone)]
pub struct Study {
    pub horizon: StudyDocument,
    pub vpl: StudyDocument,
}

/// Read both documents. Either file missing yields [`AppError::MissingInputFile`](crate::AppError).
pub fn load_study(source: &DataSource) -> AppResult<Study> {
    let results_path = source.results_path();
    let vpl_path = source.vpl_path();
    tracing::debug!(
        results = %results_path.display(),
        vpl = %vpl_path.display(),
        "loading study documents"
    );

    let horizon = load_document(&results_path)?;
    let vpl = load_document(&vpl_path)?;
    Ok(Study { horizon, vpl })
}

/// Horizon charts for one iteration count, mean first.
pub fn build_horizon_charts(
    doc: &StudyDocument,
    iterations: IterationCount,
) -> AppResult<Vec<ChartSpec>> {
    STACK_ORDER
        .iter()
        .map(|&solution| horizon_chart(doc, iterations, solution).map_err(AppError::from))
        .collect()
}

/// Convergence charts over all fixed iteration counts, mean first.
pub fn build_convergence_charts(doc: &StudyDocument) -> AppResult<Vec<ChartSpec>> {
    STACK_ORDER
        .iter()
        .map(|&solution| convergence_chart(doc, solution).map_err(AppError::from))
        .collect()
}

/// A successfully loaded page.
///
/// Convergence charts depend only on the VPL document and are built once per load;
/// changing the iteration count rebuilds the two horizon charts only.
#[derive(Debug, Clone)]
pub struct Dashboard {
    study: Study,
    selected: IterationCount,
    horizon_charts: Vec<ChartSpec>,
    horizon_error: Option<String>,
    convergence_charts: Vec<ChartSpec>,
}

impl Dashboard {
    pub fn load(source: &DataSource) -> AppResult<Self> {
        Self::load_with_selection(source, IterationCount::default())
    }

    pub fn load_with_selection(source: &DataSource, selected: IterationCount) -> AppResult<Self> {
        let result = load_study(source).and_then(|study| Self::from_study(study, selected));
        match &result {
            Ok(_) => tracing::info!(dir = %source.dir().display(), "study loaded"),
            Err(e) => tracing::warn!(dir = %source.dir().display(), error = %e, "study load failed"),
        }
        result
    }

    pub fn from_study(study: Study, selected: IterationCount) -> AppResult<Self> {
        let horizon_charts = build_horizon_charts(&study.horizon, selected)?;
        let convergence_charts = build_convergence_charts(&study.vpl)?;
        Ok(Self {
            study,
            selected,
            horizon_charts,
            horizon_error: None,
            convergence_charts,
        })
    }

    /// Switch the horizon tab to `iterations`.
    ///
    /// Returns `false` when it was already selected. On failure the requested
    /// count stays selected, the horizon charts are cleared and the user-facing
    /// message is kept in [`horizon_error`](Self::horizon_error).
    pub fn select_iterations(&mut self, iterations: IterationCount) -> AppResult<bool> {
        if iterations == self.selected {
            return Ok(false);
        }
        self.selected = iterations;
        match build_horizon_charts(&self.study.horizon, iterations) {
            Ok(charts) => {
                tracing::debug!(iterations = iterations.get(), "horizon charts rebuilt");
                self.horizon_charts = charts;
                self.horizon_error = None;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(iterations = iterations.get(), error = %e, "horizon rebuild failed");
                self.horizon_charts.clear();
                self.horizon_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Re-read both files, keeping the current selection.
    pub fn reload(&mut self, source: &DataSource) -> AppResult<()> {
        *self = Self::load_with_selection(source, self.selected)?;
        Ok(())
    }

    pub fn study(&self) -> &Study {
        &self.study
    }

    pub fn selected(&self) -> IterationCount {
        self.selected
    }

    pub fn horizon_charts(&self) -> &[ChartSpec] {
        &self.horizon_charts
    }

    /// Message for the last failed selection, shown instead of the horizon charts.
    pub fn horizon_error(&self) -> Option<&str> {
        self.horizon_error.as_deref()
    }

    pub fn convergence_charts(&self) -> &[ChartSpec] {
        &self.convergence_charts
    }

    /// Every chart on the page in display order.
    pub fn all_charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.horizon_charts
            .iter()
            .chain(self.convergence_charts.iter())
    }
}
