// Diagnostic result domain model
use super::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestType {
    Hemoglobin,
    #[serde(rename = "Blood Sugar")]
    BloodSugar,
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "BMI")]
    Bmi,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Hemoglobin => "Hemoglobin",
            TestType::BloodSugar => "Blood Sugar",
            TestType::BloodPressure => "Blood Pressure",
            TestType::Bmi => "BMI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultStatus {
    Normal,
    Borderline,
    Critical,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Normal => "Normal",
            ResultStatus::Borderline => "Borderline",
            ResultStatus::Critical => "Critical",
        }
    }

    /// Direction of the trend marker shown next to the status badge.
    pub fn is_trending_down(&self) -> bool {
        !matches!(self, ResultStatus::Normal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub id: String,
    pub beneficiary_name: String,
    pub unique_id: String,
    pub test_type: TestType,
    pub date: NaiveDate,
    pub uploaded_by: String,
    pub result_value: String,
    pub status: ResultStatus,
    pub facility: String,
}

impl Filterable for DiagnosticResult {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.beneficiary_name.as_str(), self.unique_id.as_str()]
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "testType" => Some(Cow::Borrowed(self.test_type.as_str())),
            "facility" => Some(Cow::Borrowed(&self.facility)),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }

    // Facility select values are facility types ("Primary Health Center",
    // "Sub Center", "Anganwadi") matched inside full facility names
    // ("Sub Center - Kullu").
    fn matches_criterion(&self, name: &str, value: &str) -> bool {
        match name {
            "facility" => self.facility.contains(value),
            _ => self.field(name).is_some_and(|v| v == value),
        }
    }
}
