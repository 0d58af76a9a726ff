use egui::Color32;
use egui_plot::{
    Bar, BarChart, Corner, GridMark, HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints,
    Points, uniform_grid_spacer,
};
use sa_charts::{ChartSpec, LegendPlacement, LineDash, Rgb, SeriesStyle, Ticks, group_offset};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Share of each x step covered by a group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Draw a chart description with egui_plot, title centred above the plot.
pub fn show_chart(ui: &mut egui::Ui, id: &str, chart: &ChartSpec) {
    ui.vertical_centered(|ui| {
        ui.heading(&chart.title);
    });

    let spec = Arc::new(chart.clone());

    let legend = match chart.legend {
        LegendPlacement::AboveRight => Legend::default().position(Corner::RightTop),
    };

    let mut plot = Plot::new(id)
        .height(chart.height)
        .legend(legend)
        .x_axis_label(chart.x_axis.title.clone())
        .y_axis_label(chart.y_axis.title.clone())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false);

    let fixed_bounds = chart.fixed_bounds();
    if fixed_bounds.is_some() {
        plot = plot.auto_bounds(false.into());
    }

    match &chart.x_axis.ticks {
        Ticks::Linear { step, .. } => {
            let step = *step;
            plot = plot.x_grid_spacer(uniform_grid_spacer(move |_| [step, step * 5.0, step * 10.0]));
        }
        Ticks::Array { values, .. } => {
            if let (Some(first), Some(last)) = (values.first(), values.last()) {
                plot = plot.include_x(first - 0.5).include_x(last + 0.5);
            }
            plot = plot.x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]));
        }
        Ticks::Auto => {}
    }

    let x_spec = Arc::clone(&spec);
    let y_spec = Arc::clone(&spec);
    let hover_spec = Arc::clone(&spec);
    plot = plot
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            x_spec.x_axis.format_tick(mark.value)
        })
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            y_spec.y_axis.format_tick(mark.value)
        })
        .label_formatter(move |_name, value| {
            hover_spec.hover_text(value.x).unwrap_or_default()
        });

    plot.show(ui, |plot_ui| {
        if let Some((min, max)) = fixed_bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
        }

        let count = spec.series.len();
        for (index, series) in spec.series.iter().enumerate() {
            match series.style {
                SeriesStyle::Bar => {
                    let offset = group_offset(index, count, BAR_GROUP_WIDTH);
                    let bar_width = BAR_GROUP_WIDTH / count.max(1) as f64;
                    let bars = series
                        .points()
                        .into_iter()
                        .map(|[x, y]| Bar::new(x + offset, y).width(bar_width))
                        .collect();
                    let bar_spec = Arc::clone(&spec);
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .name(&series.name)
                            .color(color(series.color))
                            .element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
                                bar_spec.hover_text(bar.argument).unwrap_or_default()
                            })),
                    );
                }
                SeriesStyle::LineMarkers {
                    line_width,
                    marker_size,
                } => {
                    let points = series.points();
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .name(&series.name)
                            .color(color(series.color))
                            .width(line_width),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .name(&series.name)
                            .color(color(series.color))
                            .radius(marker_size / 2.0),
                    );
                }
            }
        }

        for line in &spec.reference_lines {
            let style = match line.dash {
                LineDash::Solid => LineStyle::Solid,
            };
            plot_ui.hline(
                HLine::new(line.y)
                    .color(color(line.color))
                    .width(line.width)
                    .style(style),
            );
        }
    });
}
