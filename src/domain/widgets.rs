// Dashboard widget domain models: KPI tiles and charts
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Accent used for a tile's icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Destructive,
    Success,
    Warning,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTile {
    pub id: String,
    pub title: String,
    /// Pre-formatted headline value ("14,756", "87.3%").
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub description: String,
    pub tone: Tone,
}

impl KpiTile {
    pub fn new(
        id: &str,
        title: &str,
        value: &str,
        change: &str,
        trend: Trend,
        description: &str,
        tone: Tone,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            trend,
            description: description.to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: None,
        }
    }

    pub fn colored(label: &str, value: f64, color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..Self::new(label, value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<DataPoint>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            points,
        }
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ChartKind,
    pub unit: Option<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        kind: ChartKind,
        unit: Option<&str>,
        series: Vec<SeriesData>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            unit: unit.map(str::to_string),
            series,
        }
    }

    /// Category axis labels, taken from the first series.
    pub fn labels(&self) -> Vec<&str> {
        self.series
            .first()
            .map(|s| s.points.iter().map(|p| p.label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Upper bound for the value axis across all series.
    pub fn y_max(&self) -> Option<f64> {
        self.series.iter().filter_map(SeriesData::max_value).reduce(f64::max)
    }
}
