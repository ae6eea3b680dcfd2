use super::row::ResultRow;
use crate::scoring::normalize::round_one_decimal;
use crate::scoring::{visualize, RadarSeries, SubScoreSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SUMMARY_CHART_TITLE: &str = "Moyenne des indicateurs — échantillon filtré";

/// Admin filters. `None` (or an empty value) keeps every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFilter {
    #[serde(default)]
    pub departement: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tranche_age: Option<String>,
}

fn selected(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(wanted) => wanted == value,
    }
}

impl SummaryFilter {
    pub fn matches(&self, row: &ResultRow) -> bool {
        selected(&self.departement, &row.department)
            && selected(&self.kind, &row.kind)
            && selected(&self.tranche_age, &row.age_range)
    }
}

/// Distinct values offered by each admin filter, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub departements: Vec<String>,
    pub types: Vec<String>,
    pub tranches_age: Vec<String>,
}

fn distinct(rows: &[ResultRow], pick: impl Fn(&ResultRow) -> &str) -> Vec<String> {
    rows.iter()
        .map(pick)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

impl FilterOptions {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self {
            departements: distinct(rows, |row| row.department.as_str()),
            types: distinct(rows, |row| row.kind.as_str()),
            tranches_age: distinct(rows, |row| row.age_range.as_str()),
        }
    }
}

/// Filtered rows and their means. Score fields are absent when no row matches.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSummary {
    pub total_rows: usize,
    pub matching_rows: usize,
    pub filter: SummaryFilter,
    pub options: FilterOptions,
    /// Matching rows in store order.
    pub rows: Vec<ResultRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_means: Option<SubScoreSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<RadarSeries>,
}

impl AdminSummary {
    pub fn from_rows(rows: &[ResultRow], filter: SummaryFilter) -> Self {
        let options = FilterOptions::from_rows(rows);
        let view: Vec<&ResultRow> = rows.iter().filter(|row| filter.matches(row)).collect();

        let (domain_means, global_mean, chart) = if view.is_empty() {
            (None, None, None)
        } else {
            let count = view.len() as f64;
            let means = SubScoreSet::from_fn(|domain| {
                let total: f64 = view.iter().map(|row| row.indicator(domain)).sum();
                round_one_decimal(total / count)
            });
            let global_total: f64 = view.iter().map(|row| row.global_indicator).sum();
            let chart = visualize(&means, SUMMARY_CHART_TITLE);
            (
                Some(means),
                Some(round_one_decimal(global_total / count)),
                Some(chart),
            )
        };

        Self {
            total_rows: rows.len(),
            matching_rows: view.len(),
            filter,
            options,
            rows: view.into_iter().cloned().collect(),
            domain_means,
            global_mean,
            chart,
        }
    }
}
