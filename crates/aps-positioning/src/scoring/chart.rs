use super::domain::SubScoreSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialAxis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Default for RadialAxis {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            ticks: vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        }
    }
}

/// Radar-chart series. The first point is repeated at the end so renderers
/// draw a closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub title: String,
    pub points: Vec<RadarPoint>,
    pub axis: RadialAxis,
}

pub fn visualize(sub_scores: &SubScoreSet, title: impl Into<String>) -> RadarSeries {
    let mut points: Vec<RadarPoint> = sub_scores
        .iter()
        .map(|(domain, value)| RadarPoint {
            label: domain.label(),
            value,
        })
        .collect();

    if let Some(first) = points.first().cloned() {
        points.push(first);
    }

    RadarSeries {
        title: title.into(),
        points,
        axis: RadialAxis::default(),
    }
}
