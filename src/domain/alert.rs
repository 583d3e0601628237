// Alert and notification domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    HighRisk,
    Medical,
    System,
    Compliance,
    MissedIntake,
    Teleconsultation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Urgent,
    High,
    Medium,
    Low,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// Relative age as displayed, e.g. "15 minutes ago".
    pub time: String,
    pub priority: AlertPriority,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCounts {
    pub active: usize,
    pub high_priority: usize,
    pub resolved: usize,
    pub total: usize,
}

impl AlertCounts {
    pub fn tally<'a>(alerts: impl IntoIterator<Item = &'a Alert>) -> Self {
        alerts.into_iter().fold(Self::default(), |mut counts, alert| {
            match alert.status {
                AlertStatus::Active => counts.active += 1,
                AlertStatus::Resolved => counts.resolved += 1,
                AlertStatus::Dismissed => {}
            }
            if matches!(alert.priority, AlertPriority::Urgent | AlertPriority::High) {
                counts.high_priority += 1;
            }
            counts.total += 1;
            counts
        })
    }
}
