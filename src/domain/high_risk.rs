// High-risk case domain model
use super::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskType {
    SevereAnemia,
    MissedNutrition,
    DiagnosticAlert,
    PregnancyComplication,
}

impl RiskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::SevereAnemia => "severe-anemia",
            RiskType::MissedNutrition => "missed-nutrition",
            RiskType::DiagnosticAlert => "diagnostic-alert",
            RiskType::PregnancyComplication => "pregnancy-complication",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskType::SevereAnemia => "Severe Anemia",
            RiskType::MissedNutrition => "Missed Nutrition",
            RiskType::DiagnosticAlert => "Diagnostic Alert",
            RiskType::PregnancyComplication => "Pregnancy Complication",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// Clinical details attached to a case. The variant always agrees with the
/// case's [`RiskType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RiskDetails {
    #[serde(rename_all = "camelCase")]
    SevereAnemia {
        hemoglobin: String,
        condition: String,
        risk_factors: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    MissedNutrition {
        missed_visits: u32,
        condition: String,
        risk_factors: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    DiagnosticAlert {
        blood_pressure: String,
        condition: String,
        risk_factors: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    PregnancyComplication {
        gestational_age: String,
        condition: String,
        risk_factors: Vec<String>,
    },
}

impl RiskDetails {
    pub fn risk_type(&self) -> RiskType {
        match self {
            RiskDetails::SevereAnemia { .. } => RiskType::SevereAnemia,
            RiskDetails::MissedNutrition { .. } => RiskType::MissedNutrition,
            RiskDetails::DiagnosticAlert { .. } => RiskType::DiagnosticAlert,
            RiskDetails::PregnancyComplication { .. } => RiskType::PregnancyComplication,
        }
    }

    pub fn condition(&self) -> &str {
        match self {
            RiskDetails::SevereAnemia { condition, .. }
            | RiskDetails::MissedNutrition { condition, .. }
            | RiskDetails::DiagnosticAlert { condition, .. }
            | RiskDetails::PregnancyComplication { condition, .. } => condition,
        }
    }

    pub fn risk_factors(&self) -> &[String] {
        match self {
            RiskDetails::SevereAnemia { risk_factors, .. }
            | RiskDetails::MissedNutrition { risk_factors, .. }
            | RiskDetails::DiagnosticAlert { risk_factors, .. }
            | RiskDetails::PregnancyComplication { risk_factors, .. } => risk_factors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskCase {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub facility: String,
    pub priority: Priority,
    pub date_flagged: NaiveDate,
    pub last_visit: NaiveDate,
    pub contact: String,
    pub location: String,
    pub assigned_worker: String,
    pub details: RiskDetails,
}

impl HighRiskCase {
    pub fn risk_type(&self) -> RiskType {
        self.details.risk_type()
    }
}

impl Filterable for HighRiskCase {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "priority" => Some(Cow::Borrowed(self.priority.as_str())),
            "riskType" => Some(Cow::Borrowed(self.risk_type().as_str())),
            "facility" => Some(Cow::Borrowed(&self.facility)),
            _ => None,
        }
    }
}

/// Case counts per priority, over the whole caseload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub total: usize,
}

impl PriorityCounts {
    pub fn tally<'a>(cases: impl IntoIterator<Item = &'a HighRiskCase>) -> Self {
        cases.into_iter().fold(Self::default(), |mut counts, case| {
            match case.priority {
                Priority::Critical => counts.critical += 1,
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
            }
            counts.total += 1;
            counts
        })
    }
}
