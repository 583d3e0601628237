// Beneficiary lifecycle timeline domain model
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Pending,
    Flagged,
}

/// Per-kind event details. The kind of a timeline event is the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventDetails {
    #[serde(rename_all = "camelCase")]
    Registration {
        weight: String,
        height: String,
        blood_group: String,
        emergency_contact: String,
    },
    #[serde(rename_all = "camelCase")]
    Nutrition {
        bmi: String,
        hemoglobin: String,
        recommendations: String,
    },
    #[serde(rename_all = "camelCase")]
    Diagnostic {
        hemoglobin: String,
        iron_levels: String,
        recommendations: String,
    },
    #[serde(rename_all = "camelCase")]
    Risk {
        risk_level: String,
        action_required: String,
    },
    #[serde(rename_all = "camelCase")]
    Followup {
        visit_type: String,
        assigned_worker: String,
    },
}

impl EventDetails {
    pub fn kind(&self) -> &'static str {
        match self {
            EventDetails::Registration { .. } => "registration",
            EventDetails::Nutrition { .. } => "nutrition",
            EventDetails::Diagnostic { .. } => "diagnostic",
            EventDetails::Risk { .. } => "risk",
            EventDetails::Followup { .. } => "followup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: EventStatus,
    pub documents: Vec<String>,
    pub photos: Vec<String>,
    pub details: EventDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifecycle {
    pub beneficiary_id: String,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub registration_date: NaiveDate,
    pub events: Vec<TimelineEvent>,
}

impl Lifecycle {
    /// Events in chronological order; equal dates keep their recorded order.
    pub fn chronological(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.events.iter().collect();
        events.sort_by_key(|e| e.date);
        events
    }

    pub fn flagged(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter().filter(|e| e.status == EventStatus::Flagged)
    }

    /// The next event still awaiting completion, if any.
    pub fn next_pending(&self) -> Option<&TimelineEvent> {
        self.chronological()
            .into_iter()
            .find(|e| e.status == EventStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, day: u32, status: EventStatus, details: EventDetails) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            status,
            documents: vec![],
            photos: vec![],
            details,
        }
    }

    fn lifecycle() -> Lifecycle {
        Lifecycle {
            beneficiary_id: "BEN001".to_string(),
            name: "Priya Sharma".to_string(),
            age: 28,
            location: "Village Kumhari".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            events: vec![
                event(
                    "6",
                    20,
                    EventStatus::Pending,
                    EventDetails::Followup {
                        visit_type: "Home visit".to_string(),
                        assigned_worker: "ASHA Sunita Devi".to_string(),
                    },
                ),
                event(
                    "5",
                    10,
                    EventStatus::Flagged,
                    EventDetails::Risk {
                        risk_level: "Medium".to_string(),
                        action_required: "Weekly monitoring".to_string(),
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_chronological_order() {
        let l = lifecycle();
        let ids: Vec<String> = l.chronological().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, ["5", "6"]);
    }

    #[test]
    fn test_flagged_and_pending() {
        let l = lifecycle();
        assert_eq!(l.flagged().count(), 1);
        assert_eq!(l.next_pending().map(|e| e.details.kind()), Some("followup"));
    }

    #[test]
    fn test_details_tagged_by_kind() {
        let l = lifecycle();
        let json = serde_json::to_value(&l.events[1]).unwrap();
        assert_eq!(json["details"]["type"], "risk");
        assert_eq!(json["details"]["actionRequired"], "Weekly monitoring");
    }
}
