//! Line chart of total VPL against the number of annealing iterations.

use crate::model::{
    Axis, ChartKind, ChartSpec, Hover, HoverMode, LegendPlacement, Series, SeriesStyle,
    TickFormat, Ticks, XValue,
};
use crate::{ChartResult, palette};
use sa_results::{IterationCount, SolutionType, Strategy, StudyDocument};

pub fn convergence_chart(doc: &StudyDocument, solution: SolutionType) -> ChartResult<ChartSpec> {
    let labels: Vec<String> = IterationCount::FIXED.iter().map(|i| i.label()).collect();
    let x: Vec<XValue> = labels.iter().cloned().map(XValue::Category).collect();

    let mut series = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let totals = IterationCount::FIXED
            .iter()
            .map(|&iterations| doc.total_vpl(strategy, iterations, solution))
            .collect::<Result<Vec<f64>, _>>()?;
        series.push(Series {
            name: strategy.label().to_string(),
            color: palette::strategy_color(strategy),
            style: SeriesStyle::LineMarkers {
                line_width: 2.5,
                marker_size: 8.0,
            },
            x: x.clone(),
            y: totals,
        });
    }

    Ok(ChartSpec {
        title: format!("Evolução do VPL da {}", solution.title_phrase()),
        kind: ChartKind::LinesMarkers,
        series,
        reference_lines: Vec::new(),
        x_axis: Axis {
            title: "Número de Iterações".to_string(),
            range: None,
            ticks: Ticks::Array {
                values: (0..labels.len()).map(|i| i as f64).collect(),
                labels,
            },
            tick_format: TickFormat::Plain,
            grid_color: palette::GRID,
        },
        y_axis: Axis {
            title: "Valor Presente Líquido (VPL) Total".to_string(),
            range: None,
            ticks: Ticks::Auto,
            tick_format: TickFormat::Thousands,
            grid_color: palette::GRID,
        },
        hover: Hover {
            mode: HoverMode::XUnified,
            x_prefix: String::new(),
            y_prefix: String::new(),
        },
        legend: LegendPlacement::AboveRight,
        height: 500.0,
    })
}
