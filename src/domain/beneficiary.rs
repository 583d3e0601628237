// Beneficiary domain model
use super::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

/// Hemoglobin below this (g/dL) is flagged on the profile.
pub const LOW_HEMOGLOBIN_G_DL: f64 = 10.0;
/// Blood sugar above this (mg/dL) is flagged on the profile.
pub const HIGH_BLOOD_SUGAR_MG_DL: u32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    High,
    Medium,
    Low,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::High => "high",
            RiskStatus::Medium => "medium",
            RiskStatus::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }

    /// Single-letter form used in the "age/gender" table column.
    pub fn initial(&self) -> char {
        match self {
            Gender::Female => 'F',
            Gender::Male => 'M',
            Gender::Other => 'O',
        }
    }
}

/// Optional clinical readings; which ones are present depends on the
/// beneficiary's programme (maternal care, chronic disease, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReadings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl HealthReadings {
    pub fn is_hemoglobin_low(&self) -> bool {
        self.hemoglobin.is_some_and(|hb| hb < LOW_HEMOGLOBIN_G_DL)
    }

    pub fn is_blood_sugar_high(&self) -> bool {
        self.blood_sugar.is_some_and(|bs| bs > HIGH_BLOOD_SUGAR_MG_DL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub facility: String,
    pub risk_status: RiskStatus,
    pub last_update: NaiveDate,
    pub mobile: String,
    pub address: String,
    pub last_visit: Option<NaiveDate>,
    pub last_checkup: Option<NaiveDate>,
    pub readings: HealthReadings,
}

impl Beneficiary {
    /// Most recent contact date: the last visit, else the last checkup.
    pub fn last_seen(&self) -> Option<NaiveDate> {
        self.last_visit.or(self.last_checkup)
    }

    /// Avatar fallback letter.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Filterable for Beneficiary {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.mobile.as_str()]
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "risk" => Some(Cow::Borrowed(self.risk_status.as_str())),
            "facility" => Some(Cow::Borrowed(&self.facility)),
            "gender" => Some(Cow::Borrowed(self.gender.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{Criterion, FilterState};

    fn beneficiary(id: &str, name: &str, mobile: &str, risk: RiskStatus) -> Beneficiary {
        Beneficiary {
            id: id.to_string(),
            name: name.to_string(),
            age: 30,
            gender: Gender::Female,
            facility: "PHC Shimla".to_string(),
            risk_status: risk,
            last_update: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            mobile: mobile.to_string(),
            address: "Village Kufri, Shimla".to_string(),
            last_visit: None,
            last_checkup: NaiveDate::from_ymd_opt(2024, 1, 1),
            readings: HealthReadings::default(),
        }
    }

    #[test]
    fn test_search_by_mobile_and_risk() {
        let list = vec![
            beneficiary("NHM001", "Priya Sharma", "+91 98765 43210", RiskStatus::High),
            beneficiary("NHM002", "Sunita Devi", "+91 98765 43211", RiskStatus::Medium),
        ];

        let by_mobile = FilterState::new("43211").apply(&list);
        assert_eq!(by_mobile.len(), 1);
        assert_eq!(by_mobile[0].id, "NHM002");

        let by_risk = FilterState::default().with("risk", Criterion::Exactly("high".into()));
        assert_eq!(by_risk.apply(&list)[0].name, "Priya Sharma");
    }

    #[test]
    fn test_last_seen_falls_back_to_checkup() {
        let b = beneficiary("NHM003", "Rajesh Kumar", "+91 98765 43212", RiskStatus::Low);
        assert_eq!(b.last_seen(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(b.initial(), Some('R'));
    }

    #[test]
    fn test_reading_flags() {
        let readings = HealthReadings {
            hemoglobin: Some(8.2),
            blood_sugar: Some(140),
            ..HealthReadings::default()
        };
        assert!(readings.is_hemoglobin_low());
        assert!(readings.is_blood_sugar_high());
        assert!(!HealthReadings::default().is_hemoglobin_low());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_value(RiskStatus::Medium).unwrap(), "medium");
        assert_eq!(serde_json::to_value(Gender::Male).unwrap(), "Male");
    }
}
