//! Renderer-independent chart description.

use sa_results::format_thousands;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Bars of every series side by side at each x.
    GroupedBar,
    LinesMarkers,
}

/// Position along the x axis: a number or a categorical label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Category(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeriesStyle {
    Bar,
    LineMarkers { line_width: f32, marker_size: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub style: SeriesStyle,
    pub x: Vec<XValue>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Numeric x of each point; categories are placed at their index.
    pub fn positions(&self) -> Vec<f64> {
        self.x
            .iter()
            .enumerate()
            .map(|(i, x)| match x {
                XValue::Number(v) => *v,
                XValue::Category(_) => i as f64,
            })
            .collect()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.positions()
            .into_iter()
            .zip(self.y.iter().copied())
            .map(|(x, y)| [x, y])
            .collect()
    }

    pub fn numeric_x(&self) -> Vec<f64> {
        self.x
            .iter()
            .filter_map(|x| match x {
                XValue::Number(v) => Some(*v),
                XValue::Category(_) => None,
            })
            .collect()
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.x
            .iter()
            .filter_map(|x| match x {
                XValue::Category(label) => Some(label.as_str()),
                XValue::Number(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
}

/// Horizontal line spanning the full x range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: Rgb,
    pub width: f32,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum Ticks {
    Auto,
    Linear { start: f64, step: f64 },
    Array { values: Vec<f64>, labels: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    Plain,
    /// Integer with `,` separators.
    Thousands,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub range: Option<[f64; 2]>,
    pub ticks: Ticks,
    pub tick_format: TickFormat,
    pub grid_color: Rgb,
}

impl Axis {
    /// Tick label for a value on this axis.
    ///
    /// Array ticks only label their own values; anything else yields an empty string.
    pub fn format_tick(&self, value: f64) -> String {
        if let Ticks::Array { values, labels } = &self.ticks {
            return values
                .iter()
                .position(|v| (v - value).abs() < 1e-6)
                .and_then(|i| labels.get(i).cloned())
                .unwrap_or_default();
        }
        match self.tick_format {
            TickFormat::Thousands => format_thousands(value),
            TickFormat::Plain if value.fract() == 0.0 => format!("{value:.0}"),
            TickFormat::Plain => format!("{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    /// One tooltip listing every series at the hovered x.
    XUnified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    pub mode: HoverMode,
    /// Prepended to the x value in the tooltip header.
    pub x_prefix: String,
    /// Prepended to each formatted y value.
    pub y_prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPlacement {
    /// Horizontal, right-aligned, just above the plot area.
    AboveRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub hover: Hover,
    pub legend: LegendPlacement,
    pub height: f32,
}

impl ChartSpec {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Plot window `(min, max)` corners as `[x, y]` when the y axis has a fixed range.
    ///
    /// x spans every point with half a step of padding on each side. Bar bases at
    /// zero fall outside the window and are clipped.
    pub fn fixed_bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let [y_lo, y_hi] = self.y_axis.range?;
        let positions: Vec<f64> = self.series.iter().flat_map(|s| s.positions()).collect();
        if positions.is_empty() {
            return Some(([0.0, y_lo], [1.0, y_hi]));
        }
        let x_lo = positions.iter().copied().fold(f64::INFINITY, f64::min);
        let x_hi = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(([x_lo - 0.5, y_lo], [x_hi + 0.5, y_hi]))
    }

    /// Tooltip for the hovered x position, or `None` when no point is within half a step.
    pub fn hover_text(&self, x: f64) -> Option<String> {
        let mut header: Option<String> = None;
        let mut lines = Vec::new();

        for series in &self.series {
            let nearest = series
                .positions()
                .into_iter()
                .enumerate()
                .map(|(i, pos)| (i, (pos - x).abs()))
                .filter(|(_, dist)| *dist <= 0.5)
                .min_by(|a, b| a.1.total_cmp(&b.1));

            if let Some((i, _)) = nearest {
                if header.is_none() {
                    let x_text = match &series.x[i] {
                        XValue::Number(v) => self.x_axis.format_tick(*v),
                        XValue::Category(label) => label.clone(),
                    };
                    header = Some(format!("{}{}", self.hover.x_prefix, x_text));
                }
                lines.push(format!(
                    "{}: {}{}",
                    series.name,
                    self.hover.y_prefix,
                    format_thousands(series.y[i])
                ));
            }
        }

        header.map(|h| {
            let mut text = h;
            for line in lines {
                text.push('\n');
                text.push_str(&line);
            }
            text
        })
    }
}

/// Offset of bar `index` out of `count` within a group of total `group_width`,
/// so the group is centred on its x value.
pub fn group_offset(index: usize, count: usize, group_width: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let bar_width = group_width / count as f64;
    (index as f64 - (count as f64 - 1.0) / 2.0) * bar_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_padded() {
        assert_eq!(Rgb::new(0x2c, 0x3e, 0x05).hex(), "#2c3e05");
    }

    #[test]
    fn group_offsets_are_centred() {
        assert_eq!(group_offset(0, 2, 0.8), -0.2);
        assert_eq!(group_offset(1, 2, 0.8), 0.2);
        assert_eq!(group_offset(0, 1, 0.8), 0.0);
        assert_eq!(group_offset(0, 0, 0.8), 0.0);
    }

    #[test]
    fn array_ticks_only_label_their_values() {
        let axis = Axis {
            title: String::new(),
            range: None,
            ticks: Ticks::Array {
                values: vec![0.0, 1.0],
                labels: vec!["5,000".into(), "10,000".into()],
            },
            tick_format: TickFormat::Plain,
            grid_color: Rgb::new(0, 0, 0),
        };
        assert_eq!(axis.format_tick(1.0), "10,000");
        assert_eq!(axis.format_tick(0.5), "");
    }
}
