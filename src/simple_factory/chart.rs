use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use super::tag_matches;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Histogram,
    Pie,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Histogram, ChartKind::Pie, ChartKind::Line];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = PatternError;

    fn from_str(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| tag_matches(tag, kind.as_str()))
            .ok_or_else(|| PatternError::unknown_variant("chart", tag, Self::ALL.map(ChartKind::as_str)))
    }
}

pub trait Chart {
    fn kind(&self) -> ChartKind;

    fn render(&self) -> String;

    fn display(&self) {
        println!("{}", self.render());
    }
}

#[derive(Debug, Default)]
pub struct HistogramChart;

impl Chart for HistogramChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Histogram
    }

    fn render(&self) -> String {
        "Displaying histogram chart".to_string()
    }
}

#[derive(Debug, Default)]
pub struct PieChart;

impl Chart for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(&self) -> String {
        "Displaying pie chart".to_string()
    }
}

#[derive(Debug, Default)]
pub struct LineChart;

impl Chart for LineChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn render(&self) -> String {
        "Displaying line chart".to_string()
    }
}

pub struct ChartFactory;

impl ChartFactory {
    pub fn get_chart(tag: &str) -> Result<Box<dyn Chart>> {
        let kind = tag.parse::<ChartKind>().inspect_err(|err| {
            warn!(%err, "rejected chart tag");
        })?;

        let chart: Box<dyn Chart> = match kind {
            ChartKind::Histogram => Box::new(HistogramChart),
            ChartKind::Pie => Box::new(PieChart),
            ChartKind::Line => Box::new(LineChart),
        };
        info!(%kind, "initialising chart settings");
        Ok(chart)
    }
}
