// Nutrition and medicine intake domain model
use super::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    Complete,
    Pending,
    Missed,
}

impl IntakeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeStatus::Complete => "complete",
            IntakeStatus::Pending => "pending",
            IntakeStatus::Missed => "missed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub id: String,
    pub beneficiary: BeneficiaryRef,
    pub intake_recorded: String,
    pub photo_uploaded: bool,
    pub date: NaiveDate,
    pub status: IntakeStatus,
    pub recorded_by: String,
    pub dosage: String,
    /// Compliance percentage, 0-100.
    pub compliance: u8,
    pub notes: String,
}

impl Filterable for IntakeRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.beneficiary.name.as_str(),
            self.beneficiary.id.as_str(),
            self.intake_recorded.as_str(),
        ]
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }

    // "supplement" is a derived select: given = photo proof uploaded,
    // not-given = no photo, missed = intake status missed.
    fn matches_criterion(&self, name: &str, value: &str) -> bool {
        match (name, value) {
            ("supplement", "given") => self.photo_uploaded,
            ("supplement", "not-given") => !self.photo_uploaded,
            ("supplement", "missed") => self.status == IntakeStatus::Missed,
            ("supplement", _) => false,
            _ => self.field(name).is_some_and(|v| v == value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeCounts {
    pub complete: usize,
    pub pending: usize,
    pub missed: usize,
    pub total: usize,
}

impl IntakeCounts {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a IntakeRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut counts, record| {
            match record.status {
                IntakeStatus::Complete => counts.complete += 1,
                IntakeStatus::Pending => counts.pending += 1,
                IntakeStatus::Missed => counts.missed += 1,
            }
            counts.total += 1;
            counts
        })
    }
}
