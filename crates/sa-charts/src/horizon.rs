//! Grouped bar chart of yearly VPL over the planning horizon.

use crate::model::{
    Axis, ChartKind, ChartSpec, Hover, HoverMode, LegendPlacement, LineDash, ReferenceLine,
    Series, SeriesStyle, TickFormat, Ticks, XValue,
};
use crate::{ChartResult, palette};
use sa_results::{HORIZON_YEARS, IterationCount, SolutionType, Strategy, StudyDocument};

/// Acceptance band drawn on every horizon chart.
pub const LIMIT_LINES: [f64; 2] = [140_000.0, 160_000.0];

const Y_RANGE: [f64; 2] = [120_000.0, 170_000.0];

pub fn horizon_chart(
    doc: &StudyDocument,
    iterations: IterationCount,
    solution: SolutionType,
) -> ChartResult<ChartSpec> {
    let years: Vec<XValue> = (1..=HORIZON_YEARS)
        .map(|year| XValue::Number(year as f64))
        .collect();

    let mut series = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let values = doc.horizon(strategy, iterations, solution)?;
        series.push(Series {
            name: strategy.label().to_string(),
            color: palette::strategy_color(strategy),
            style: SeriesStyle::Bar,
            x: years.clone(),
            y: values,
        });
    }

    let reference_lines = LIMIT_LINES
        .iter()
        .map(|&y| ReferenceLine {
            y,
            color: palette::LIMIT,
            width: 2.0,
            dash: LineDash::Solid,
        })
        .collect();

    Ok(ChartSpec {
        title: format!(
            "Análise da {} ({} Iterações)",
            solution.title_phrase(),
            iterations.label()
        ),
        kind: ChartKind::GroupedBar,
        series,
        reference_lines,
        x_axis: Axis {
            title: "Ano do Horizonte de Planejamento".to_string(),
            range: None,
            ticks: Ticks::Linear {
                start: 1.0,
                step: 1.0,
            },
            tick_format: TickFormat::Plain,
            grid_color: palette::GRID,
        },
        y_axis: Axis {
            title: "Valor Presente Líquido (VPL)".to_string(),
            range: Some(Y_RANGE),
            ticks: Ticks::Auto,
            tick_format: TickFormat::Thousands,
            grid_color: palette::GRID,
        },
        hover: Hover {
            mode: HoverMode::XUnified,
            x_prefix: "Ano: ".to_string(),
            y_prefix: "VPL ".to_string(),
        },
        legend: LegendPlacement::AboveRight,
        height: 500.0,
    })
}
