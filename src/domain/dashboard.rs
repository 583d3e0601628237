// Dashboard domain model
use super::alert::Alert;
use super::beneficiary::RiskStatus;
use super::widgets::{ChartData, KpiTile};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub scope: Vec<ScopeLevel>,
    pub tiles: Vec<KpiTile>,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(title: String, subtitle: String, tiles: Vec<KpiTile>, charts: Vec<ChartData>) -> Self {
        Self {
            title,
            subtitle,
            scope: Vec::new(),
            tiles,
            charts,
        }
    }

    pub fn with_scope(mut self, scope: Vec<ScopeLevel>) -> Self {
        self.scope = scope;
        self
    }
}

/// One level of the administrative drill-down (state, district, block,
/// facility). Levels without options are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeLevel {
    pub label: String,
    pub value: String,
    pub options: Vec<String>,
}

impl ScopeLevel {
    pub fn new(label: &str, value: &str, options: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Switch to `value` if it is one of this level's options.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o == value) {
            self.value = value.to_string();
            true
        } else {
            false
        }
    }
}

/// Apply a selection to the level whose label matches `level`
/// case-insensitively. Returns false when nothing changed.
pub fn select_scope(levels: &mut [ScopeLevel], level: &str, value: &str) -> bool {
    levels
        .iter_mut()
        .find(|l| l.label.eq_ignore_ascii_case(level))
        .is_some_and(|l| l.select(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictCoverage {
    pub district: String,
    pub coverage: u32,
    pub beneficiaries: u32,
    pub risk: RiskStatus,
}

/// The live monitoring page: the overview plus notifications and a
/// per-district coverage table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringDashboard {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub notifications: Vec<Alert>,
    pub districts: Vec<DistrictCoverage>,
}
