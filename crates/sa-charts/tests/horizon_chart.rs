mod common;

use common::full_horizon_document;
use proptest::prelude::*;
use sa_charts::*;
use sa_results::{IterationCount, SolutionType, Strategy};

#[test]
fn every_selection_yields_two_series_of_sixteen_years() {
    let doc = full_horizon_document();
    let years: Vec<f64> = (1..=16).map(|y| y as f64).collect();

    for iterations in IterationCount::FIXED {
        for solution in SolutionType::ALL {
            let chart = horizon_chart(&doc, iterations, solution).unwrap();
            assert_eq!(chart.kind, ChartKind::GroupedBar);
            assert_eq!(chart.series.len(), 2);
            for series in &chart.series {
                assert_eq!(series.len(), 16);
                assert_eq!(series.numeric_x(), years);
                assert_eq!(series.style, SeriesStyle::Bar);
            }
            assert_eq!(chart.series[0].name, "Aleatória");
            assert_eq!(chart.series[1].name, "Localizada");
        }
    }
}

#[test]
fn titles_follow_solution_type() {
    let doc = full_horizon_document();
    let mean = horizon_chart(&doc, IterationCount(10000), SolutionType::Mean).unwrap();
    let best = horizon_chart(&doc, IterationCount(50000), SolutionType::Best).unwrap();
    assert_eq!(mean.title, "Análise da Solução Média (10,000 Iterações)");
    assert_eq!(best.title, "Análise da Melhor Solução (50,000 Iterações)");
}

#[test]
fn layout_is_fixed() {
    let doc = full_horizon_document();
    let chart = horizon_chart(&doc, IterationCount(5000), SolutionType::Mean).unwrap();

    let lines: Vec<f64> = chart.reference_lines.iter().map(|l| l.y).collect();
    assert_eq!(lines, vec![140_000.0, 160_000.0]);
    for line in &chart.reference_lines {
        assert_eq!(line.color.hex(), "#c42b1a");
        assert_eq!(line.dash, LineDash::Solid);
    }

    assert_eq!(chart.y_axis.range, Some([120_000.0, 170_000.0]));
    assert_eq!(chart.y_axis.tick_format, TickFormat::Thousands);
    assert_eq!(
        chart.x_axis.ticks,
        Ticks::Linear {
            start: 1.0,
            step: 1.0
        }
    );
    assert_eq!(chart.hover.mode, HoverMode::XUnified);
    assert_eq!(chart.series[0].color.hex(), "#2c3e50");
    assert_eq!(chart.series[1].color.hex(), "#f0cb13");
}

#[test]
fn series_values_come_straight_from_the_document() {
    let mut doc = full_horizon_document();
    let ramp: Vec<f64> = (1..=16).map(|v| v as f64).collect();
    doc.insert_series("aleatoria", "10000", "solucao media", ramp.clone());

    let chart = horizon_chart(&doc, IterationCount(10000), SolutionType::Mean).unwrap();
    assert_eq!(chart.series_named("Aleatória").unwrap().y, ramp);
}

#[test]
fn missing_iteration_key_fails() {
    for strategy in Strategy::ALL {
        let mut doc = full_horizon_document();
        doc.remove_iterations(strategy.key(), "25000");

        let err = horizon_chart(&doc, IterationCount(25000), SolutionType::Mean).unwrap_err();
        assert!(format!("{err}").contains("25000"));

        // Other iteration counts are unaffected.
        assert!(horizon_chart(&doc, IterationCount(5000), SolutionType::Mean).is_ok());
    }
}

#[test]
fn unknown_iteration_count_fails() {
    let doc = full_horizon_document();
    assert!(horizon_chart(&doc, IterationCount(7500), SolutionType::Best).is_err());
}

#[test]
fn short_horizon_fails_loudly() {
    let mut doc = full_horizon_document();
    doc.insert_series("localizada", "5000", "melhor solucao", vec![1.0; 15]);
    let err = horizon_chart(&doc, IterationCount(5000), SolutionType::Best).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Lookup(sa_results::ResultsError::ShapeMismatch { found: 15, .. })
    ));
}

#[test]
fn unified_hover_lists_both_strategies() {
    let mut doc = full_horizon_document();
    doc.insert_series("aleatoria", "5000", "solucao media", vec![150_000.4; 16]);
    doc.insert_series("localizada", "5000", "solucao media", vec![1_234_567.0; 16]);
    let chart = horizon_chart(&doc, IterationCount(5000), SolutionType::Mean).unwrap();

    let text = chart.hover_text(3.2).unwrap();
    assert_eq!(
        text,
        "Ano: 3\nAleatória: VPL 150,000\nLocalizada: VPL 1,234,567"
    );
    assert!(chart.hover_text(20.0).is_none());
}

#[test]
fn plot_window_holds_the_fixed_range() {
    let mut doc = full_horizon_document();
    doc.insert_series("aleatoria", "5000", "solucao media", vec![150_000.0; 16]);
    doc.insert_series("localizada", "5000", "solucao media", vec![10.0; 16]);
    let chart = horizon_chart(&doc, IterationCount(5000), SolutionType::Mean).unwrap();

    let (min, max) = chart.fixed_bounds().unwrap();
    assert_eq!(min, [0.5, 120_000.0]);
    assert_eq!(max, [16.5, 170_000.0]);
}

proptest! {
    #[test]
    fn limit_lines_ignore_data(values in proptest::collection::vec(-1.0e7f64..1.0e7, 16)) {
        let mut doc = full_horizon_document();
        doc.insert_series("aleatoria", "50000", "melhor solucao", values.clone());
        let chart = horizon_chart(&doc, IterationCount(50000), SolutionType::Best).unwrap();
        let lines: Vec<f64> = chart.reference_lines.iter().map(|l| l.y).collect();
        prop_assert_eq!(lines, LIMIT_LINES.to_vec());
        prop_assert_eq!(&chart.series[0].y, &values);
    }
}
