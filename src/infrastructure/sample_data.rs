// In-memory repository over the embedded sample records
use crate::application::sample_repository::SampleRepository;
use crate::domain::alert::{Alert, AlertKind, AlertPriority, AlertStatus};
use crate::domain::beneficiary::{Beneficiary, Gender, HealthReadings, RiskStatus};
use crate::domain::dashboard::{DistrictCoverage, ScopeLevel};
use crate::domain::diagnostic::{DiagnosticResult, ResultStatus, TestType};
use crate::domain::facility::Facility;
use crate::domain::high_risk::{HighRiskCase, Priority, RiskDetails};
use crate::domain::iec::{IecMaterial, Language, MaterialCategory, MaterialStatus, MaterialType};
use crate::domain::lifecycle::{EventDetails, EventStatus, Lifecycle, TimelineEvent};
use crate::domain::nutrition::{BeneficiaryRef, IntakeRecord, IntakeStatus};
use crate::domain::report::{Report, ReportStatus};
use crate::domain::widgets::{ChartData, ChartKind, DataPoint, KpiTile, SeriesData, Tone, Trend};
use chrono::NaiveDate;

/// Holds one pristine copy of every dataset and clones it per request.
#[derive(Debug, Clone)]
pub struct InMemorySampleRepository {
    beneficiaries: Vec<Beneficiary>,
    lifecycles: Vec<Lifecycle>,
    high_risk_cases: Vec<HighRiskCase>,
    intake_records: Vec<IntakeRecord>,
    diagnostic_results: Vec<DiagnosticResult>,
    iec_materials: Vec<IecMaterial>,
    facilities: Vec<Facility>,
    alerts: Vec<Alert>,
    notifications: Vec<Alert>,
    reports: Vec<Report>,
}

impl Default for InMemorySampleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySampleRepository {
    pub fn new() -> Self {
        Self {
            beneficiaries: beneficiaries(),
            lifecycles: vec![priya_lifecycle()],
            high_risk_cases: high_risk_cases(),
            intake_records: intake_records(),
            diagnostic_results: diagnostic_results(),
            iec_materials: iec_materials(),
            facilities: facilities(),
            alerts: alerts(),
            notifications: notifications(),
            reports: reports(),
        }
    }
}

impl SampleRepository for InMemorySampleRepository {
    fn beneficiaries(&self) -> Vec<Beneficiary> {
        self.beneficiaries.clone()
    }

    fn lifecycle(&self, beneficiary_id: &str) -> Option<Lifecycle> {
        self.lifecycles
            .iter()
            .find(|l| l.beneficiary_id == beneficiary_id)
            .cloned()
    }

    fn high_risk_cases(&self) -> Vec<HighRiskCase> {
        self.high_risk_cases.clone()
    }

    fn intake_records(&self) -> Vec<IntakeRecord> {
        self.intake_records.clone()
    }

    fn diagnostic_results(&self) -> Vec<DiagnosticResult> {
        self.diagnostic_results.clone()
    }

    fn iec_materials(&self) -> Vec<IecMaterial> {
        self.iec_materials.clone()
    }

    fn facilities(&self) -> Vec<Facility> {
        self.facilities.clone()
    }

    fn alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }

    fn notifications(&self) -> Vec<Alert> {
        self.notifications.clone()
    }

    fn reports(&self) -> Vec<Report> {
        self.reports.clone()
    }

    fn overview_tiles(&self) -> Vec<KpiTile> {
        vec![
            KpiTile::new(
                "active-beneficiaries",
                "Active Beneficiaries",
                "12,847",
                "+2.3%",
                Trend::Up,
                "Total registered beneficiaries",
                Tone::Primary,
            ),
            KpiTile::new(
                "high-risk-cases",
                "High-Risk Cases",
                "234",
                "-5.2%",
                Trend::Down,
                "Requiring immediate attention",
                Tone::Destructive,
            ),
            KpiTile::new(
                "nutrition-cycles",
                "Completed Nutrition Cycles",
                "8,456",
                "+12.7%",
                Trend::Up,
                "This month",
                Tone::Success,
            ),
        ]
    }

    fn overview_charts(&self) -> Vec<ChartData> {
        let districts = ["Shimla", "Kullu", "Mandi", "Bilaspur", "Kangra", "Chamba"];
        let coverage = [85.0, 78.0, 92.0, 76.0, 88.0, 82.0];

        vec![
            ChartData::new(
                "nutrition-coverage",
                "Nutrition Coverage by District",
                "Current vs Target Coverage (%)",
                ChartKind::Bar,
                Some("%"),
                vec![
                    SeriesData::new("coverage", "Current Coverage", None, points(&districts, &coverage)),
                    SeriesData::new("target", "Target", None, points(&districts, &[90.0; 6])),
                ],
            ),
            anemia_chart(
                "Anemia Trends",
                [[45.0, 42.0, 38.0, 35.0, 32.0, 29.0], [25.0, 23.0, 20.0, 18.0, 16.0, 14.0], [8.0, 7.0, 6.0, 5.0, 4.0, 3.0]],
            ),
            facility_mix_chart(&[
                ("PHCs", 45.0, "#2563eb"),
                ("CHCs", 23.0, "#059669"),
                ("Sub-Centers", 78.0, "#d97706"),
                ("District Hospitals", 12.0, "#dc2626"),
            ]),
        ]
    }

    fn monitoring_tiles(&self) -> Vec<KpiTile> {
        vec![
            KpiTile::new(
                "active-beneficiaries",
                "Active Beneficiaries",
                "14,756",
                "+3.2%",
                Trend::Up,
                "Currently enrolled",
                Tone::Primary,
            ),
            KpiTile::new(
                "high-risk-cases",
                "High-Risk Cases",
                "187",
                "-8.1%",
                Trend::Down,
                "Requiring immediate attention",
                Tone::Destructive,
            ),
            KpiTile::new(
                "nutrition-compliance",
                "Nutrition Compliance",
                "87.3%",
                "+4.5%",
                Trend::Up,
                "Meeting intake targets",
                Tone::Success,
            ),
            KpiTile::new(
                "teleconsultations",
                "Completed Teleconsultations",
                "2,456",
                "+12.8%",
                Trend::Up,
                "This month",
                Tone::Secondary,
            ),
        ]
    }

    fn monitoring_charts(&self) -> Vec<ChartData> {
        let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

        vec![
            ChartData::new(
                "nutrition-trends",
                "Nutrition Coverage Trends",
                "Monthly coverage against target (%)",
                ChartKind::Line,
                Some("%"),
                vec![
                    SeriesData::new(
                        "coverage",
                        "Coverage",
                        None,
                        points(&months, &[78.0, 82.0, 79.0, 86.0, 88.0, 87.0]),
                    ),
                    SeriesData::new("target", "Target", None, points(&months, &[85.0; 6])),
                ],
            ),
            anemia_chart(
                "Anemia Rates",
                [[45.0, 42.0, 40.0, 38.0, 36.0, 34.0], [28.0, 25.0, 23.0, 21.0, 19.0, 17.0], [12.0, 10.0, 8.0, 7.0, 6.0, 5.0]],
            ),
            facility_mix_chart(&[
                ("PHC", 45.0, "#22c55e"),
                ("CHC", 30.0, "#3b82f6"),
                ("SDH", 15.0, "#f59e0b"),
                ("DH", 10.0, "#ef4444"),
            ]),
        ]
    }

    fn district_coverage(&self) -> Vec<DistrictCoverage> {
        [
            ("Shimla", 92, 2845, RiskStatus::Low),
            ("Kullu", 88, 1967, RiskStatus::Medium),
            ("Mandi", 85, 3421, RiskStatus::Medium),
            ("Solan", 79, 1523, RiskStatus::High),
            ("Hamirpur", 94, 2156, RiskStatus::Low),
        ]
        .into_iter()
        .map(|(district, coverage, beneficiaries, risk)| DistrictCoverage {
            district: district.to_string(),
            coverage,
            beneficiaries,
            risk,
        })
        .collect()
    }

    fn scope_levels(&self) -> Vec<ScopeLevel> {
        vec![
            ScopeLevel::new("State", "Himachal Pradesh", &["Himachal Pradesh", "Punjab", "Haryana"]),
            ScopeLevel::new("District", "Shimla", &["Shimla", "Kullu", "Mandi", "Kangra"]),
            ScopeLevel::new("Block", "Shimla Rural", &["Shimla Rural", "Shimla Urban", "Theog"]),
            ScopeLevel::new("Facility", "All Facilities", &[]),
        ]
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn points(labels: &[&str], values: &[f64]) -> Vec<DataPoint> {
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| DataPoint::new(label, *value))
        .collect()
}

fn anemia_chart(title: &str, [mild, moderate, severe]: [[f64; 6]; 3]) -> ChartData {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    ChartData::new(
        "anemia-trends",
        title,
        "Cases by severity over time",
        ChartKind::Line,
        None,
        vec![
            SeriesData::new("mild", "Mild", None, points(&months, &mild)),
            SeriesData::new("moderate", "Moderate", None, points(&months, &moderate)),
            SeriesData::new("severe", "Severe", Some("#dc2626"), points(&months, &severe)),
        ],
    )
}

fn facility_mix_chart(slices: &[(&str, f64, &str)]) -> ChartData {
    let points = slices
        .iter()
        .map(|(name, value, color)| DataPoint::colored(name, *value, color))
        .collect();
    ChartData::new(
        "facility-performance",
        "Facility Performance",
        "Active facilities by type",
        ChartKind::Pie,
        None,
        vec![SeriesData::new("facilities", "Facilities", None, points)],
    )
}

fn beneficiaries() -> Vec<Beneficiary> {
    vec![
        Beneficiary {
            id: "NHM001".to_string(),
            name: "Priya Sharma".to_string(),
            age: 28,
            gender: Gender::Female,
            facility: "PHC Shimla".to_string(),
            risk_status: RiskStatus::High,
            last_update: date(2024, 1, 8),
            mobile: "+91 98765 43210".to_string(),
            address: "Village Kufri, Shimla".to_string(),
            last_visit: Some(date(2024, 1, 5)),
            last_checkup: None,
            readings: HealthReadings {
                pregnancy_week: Some(32),
                hemoglobin: Some(8.2),
                ..HealthReadings::default()
            },
        },
        Beneficiary {
            id: "NHM002".to_string(),
            name: "Sunita Devi".to_string(),
            age: 24,
            gender: Gender::Female,
            facility: "CHC Mandi".to_string(),
            risk_status: RiskStatus::Medium,
            last_update: date(2024, 1, 7),
            mobile: "+91 98765 43211".to_string(),
            address: "Village Rewalsar, Mandi".to_string(),
            last_visit: Some(date(2024, 1, 3)),
            last_checkup: None,
            readings: HealthReadings {
                pregnancy_week: Some(16),
                hemoglobin: Some(10.1),
                ..HealthReadings::default()
            },
        },
        Beneficiary {
            id: "NHM003".to_string(),
            name: "Rajesh Kumar".to_string(),
            age: 45,
            gender: Gender::Male,
            facility: "PHC Kullu".to_string(),
            risk_status: RiskStatus::Low,
            last_update: date(2024, 1, 6),
            mobile: "+91 98765 43212".to_string(),
            address: "Village Manali, Kullu".to_string(),
            last_visit: None,
            last_checkup: Some(date(2024, 1, 1)),
            readings: HealthReadings {
                blood_sugar: Some(140),
                condition: Some("Diabetes monitoring".to_string()),
                ..HealthReadings::default()
            },
        },
    ]
}

fn priya_lifecycle() -> Lifecycle {
    Lifecycle {
        beneficiary_id: "NHM001".to_string(),
        name: "Priya Sharma".to_string(),
        age: 28,
        location: "Village Kumhari, District Bilaspur".to_string(),
        registration_date: date(2024, 1, 15),
        events: vec![
            TimelineEvent {
                id: "1".to_string(),
                title: "Beneficiary Registration".to_string(),
                description: "Initial registration completed with basic health assessment".to_string(),
                date: date(2024, 1, 15),
                status: EventStatus::Completed,
                documents: strings(&["Registration Form", "ID Proof", "Address Proof"]),
                photos: vec![],
                details: EventDetails::Registration {
                    weight: "52 kg".to_string(),
                    height: "158 cm".to_string(),
                    blood_group: "O+".to_string(),
                    emergency_contact: "+91 9876543210".to_string(),
                },
            },
            TimelineEvent {
                id: "2".to_string(),
                title: "Nutritional Assessment".to_string(),
                description: "First nutritional intake assessment and counseling session".to_string(),
                date: date(2024, 1, 22),
                status: EventStatus::Completed,
                documents: strings(&["Nutrition Plan", "Dietary Guidelines"]),
                photos: strings(&["nutrition_chart.jpg"]),
                details: EventDetails::Nutrition {
                    bmi: "20.8".to_string(),
                    hemoglobin: "11.2 g/dL".to_string(),
                    recommendations: "Iron-rich diet, folic acid supplements".to_string(),
                },
            },
            TimelineEvent {
                id: "3".to_string(),
                title: "Blood Test - Routine".to_string(),
                description: "Comprehensive blood work including CBC and iron studies".to_string(),
                date: date(2024, 2, 5),
                status: EventStatus::Completed,
                documents: strings(&["Lab Report", "Doctor's Notes"]),
                photos: vec![],
                details: EventDetails::Diagnostic {
                    hemoglobin: "11.8 g/dL".to_string(),
                    iron_levels: "Normal".to_string(),
                    recommendations: "Continue iron supplements".to_string(),
                },
            },
            TimelineEvent {
                id: "5".to_string(),
                title: "Risk Flag - Low Hemoglobin".to_string(),
                description: "Hemoglobin levels below threshold, immediate intervention required".to_string(),
                date: date(2024, 3, 10),
                status: EventStatus::Flagged,
                documents: strings(&["Risk Assessment", "Intervention Plan"]),
                photos: vec![],
                details: EventDetails::Risk {
                    risk_level: "Medium".to_string(),
                    action_required: "Immediate iron supplementation and weekly monitoring".to_string(),
                },
            },
            TimelineEvent {
                id: "6".to_string(),
                title: "Follow-up Visit Scheduled".to_string(),
                description: "Weekly monitoring visit for hemoglobin improvement".to_string(),
                date: date(2024, 3, 20),
                status: EventStatus::Pending,
                documents: vec![],
                photos: vec![],
                details: EventDetails::Followup {
                    visit_type: "Home visit".to_string(),
                    assigned_worker: "ASHA Sunita Devi".to_string(),
                },
            },
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    name: &str,
    age: u32,
    facility: &str,
    priority: Priority,
    flagged: NaiveDate,
    last_visit: NaiveDate,
    contact: &str,
    location: &str,
    worker: &str,
    details: RiskDetails,
) -> HighRiskCase {
    HighRiskCase {
        id: id.to_string(),
        name: name.to_string(),
        age,
        facility: facility.to_string(),
        priority,
        date_flagged: flagged,
        last_visit,
        contact: contact.to_string(),
        location: location.to_string(),
        assigned_worker: worker.to_string(),
        details,
    }
}

fn high_risk_cases() -> Vec<HighRiskCase> {
    vec![
        case(
            "BEN001",
            "Priya Sharma",
            28,
            "PHC Kumhari",
            Priority::Critical,
            date(2024, 3, 15),
            date(2024, 3, 10),
            "+91 9876543210",
            "Village Kumhari, Bilaspur",
            "ASHA Sunita Devi",
            RiskDetails::SevereAnemia {
                hemoglobin: "6.2 g/dL".to_string(),
                condition: "Severe anemia requiring immediate intervention".to_string(),
                risk_factors: strings(&["Pregnancy", "Poor nutrition", "Missed supplements"]),
            },
        ),
        case(
            "BEN002",
            "Kavita Patel",
            24,
            "CHC Bilaspur",
            Priority::High,
            date(2024, 3, 14),
            date(2024, 2, 28),
            "+91 9876543211",
            "Ward 15, Bilaspur",
            "ANM Rekha Singh",
            RiskDetails::MissedNutrition {
                missed_visits: 3,
                condition: "Missed nutrition supplements for 3 consecutive visits".to_string(),
                risk_factors: strings(&["Low BMI", "First pregnancy", "Distance from facility"]),
            },
        ),
        case(
            "BEN003",
            "Meera Yadav",
            32,
            "SC Korba",
            Priority::Critical,
            date(2024, 3, 13),
            date(2024, 3, 12),
            "+91 9876543212",
            "Village Katghora, Korba",
            "ASHA Kamla Bai",
            RiskDetails::DiagnosticAlert {
                blood_pressure: "160/110 mmHg".to_string(),
                condition: "Severe hypertension during pregnancy".to_string(),
                risk_factors: strings(&["Gestational hypertension", "Previous pregnancy complications"]),
            },
        ),
        case(
            "BEN004",
            "Sunita Verma",
            19,
            "PHC Durg",
            Priority::High,
            date(2024, 3, 12),
            date(2024, 3, 11),
            "+91 9876543213",
            "Sector 8, Durg",
            "ANM Sushma Jain",
            RiskDetails::PregnancyComplication {
                gestational_age: "32 weeks".to_string(),
                condition: "Multiple pregnancy complications".to_string(),
                risk_factors: strings(&["Teen pregnancy", "Low weight gain", "Irregular checkups"]),
            },
        ),
        case(
            "BEN005",
            "Radha Sahu",
            26,
            "CHC Raipur",
            Priority::Medium,
            date(2024, 3, 11),
            date(2024, 3, 5),
            "+91 9876543214",
            "Village Arang, Raipur",
            "ASHA Pushpa Devi",
            RiskDetails::MissedNutrition {
                missed_visits: 2,
                condition: "Irregular nutrition supplement intake".to_string(),
                risk_factors: strings(&["Work commitments", "Transportation issues"]),
            },
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn intake(
    id: &str,
    beneficiary: (&str, &str),
    intake_recorded: &str,
    photo_uploaded: bool,
    date: NaiveDate,
    status: IntakeStatus,
    recorded_by: &str,
    dosage: &str,
    compliance: u8,
    notes: &str,
) -> IntakeRecord {
    IntakeRecord {
        id: id.to_string(),
        beneficiary: BeneficiaryRef {
            id: beneficiary.0.to_string(),
            name: beneficiary.1.to_string(),
        },
        intake_recorded: intake_recorded.to_string(),
        photo_uploaded,
        date,
        status,
        recorded_by: recorded_by.to_string(),
        dosage: dosage.to_string(),
        compliance,
        notes: notes.to_string(),
    }
}

fn intake_records() -> Vec<IntakeRecord> {
    vec![
        intake(
            "INT001",
            ("NHM001", "Priya Sharma"),
            "IFA Tablets",
            true,
            date(2024, 1, 8),
            IntakeStatus::Complete,
            "ASHA Sunita",
            "1 tablet",
            100,
            "Taken with food as advised",
        ),
        intake(
            "INT002",
            ("NHM002", "Sunita Devi"),
            "Calcium Supplements",
            false,
            date(2024, 1, 8),
            IntakeStatus::Pending,
            "AWW Meera",
            "2 tablets",
            75,
            "Photo verification pending",
        ),
        intake(
            "INT003",
            ("NHM003", "Rajesh Kumar"),
            "Diabetic Medicine",
            true,
            date(2024, 1, 7),
            IntakeStatus::Missed,
            "ASHA Kavita",
            "2 tablets morning",
            60,
            "Missed morning dose, needs follow-up",
        ),
        intake(
            "INT004",
            ("NHM004", "Anita Singh"),
            "Vitamin D",
            true,
            date(2024, 1, 8),
            IntakeStatus::Complete,
            "AWW Pooja",
            "1 capsule weekly",
            95,
            "Regular intake maintained",
        ),
    ]
}

fn diagnostic_results() -> Vec<DiagnosticResult> {
    [
        ("1", "Priya Sharma", "BEN001234", TestType::Hemoglobin, 8, "Dr. Amit Kumar", "8.2 g/dL", ResultStatus::Critical, "Primary Health Center - Shimla"),
        ("2", "Rajesh Verma", "BEN001235", TestType::BloodSugar, 7, "Nurse Kavita", "140 mg/dL", ResultStatus::Borderline, "Community Health Center - Mandi"),
        ("3", "Sunita Devi", "BEN001236", TestType::Hemoglobin, 6, "Dr. Ravi Singh", "12.5 g/dL", ResultStatus::Normal, "District Hospital - Kangra"),
        ("4", "Mohan Lal", "BEN001237", TestType::BloodPressure, 5, "ASHA Meera", "150/95 mmHg", ResultStatus::Critical, "Sub Center - Kullu"),
        ("5", "Geeta Singh", "BEN001238", TestType::Bmi, 4, "AWW Lakshmi", "18.5 kg/m²", ResultStatus::Normal, "Anganwadi Center - Solan"),
    ]
    .into_iter()
    .map(|(id, name, unique_id, test_type, day, uploaded_by, value, status, facility)| DiagnosticResult {
        id: id.to_string(),
        beneficiary_name: name.to_string(),
        unique_id: unique_id.to_string(),
        test_type,
        date: date(2024, 12, day),
        uploaded_by: uploaded_by.to_string(),
        result_value: value.to_string(),
        status,
        facility: facility.to_string(),
    })
    .collect()
}

fn iec_materials() -> Vec<IecMaterial> {
    [
        ("1", "Nutritional Guidelines for Pregnant Women", MaterialType::Pdf, MaterialCategory::WomenHealth, Language::Both, "Dr. Priya Sharma", 15, "2.4 MB", MaterialStatus::Published),
        ("2", "Child Vaccination Schedule Poster", MaterialType::Poster, MaterialCategory::ChildHealth, Language::Hindi, "ANM Sunita Devi", 20, "1.8 MB", MaterialStatus::Published),
        ("3", "Breastfeeding Awareness Video", MaterialType::Video, MaterialCategory::Nutrition, Language::English, "Dr. Rajesh Kumar", 25, "45.2 MB", MaterialStatus::UnderReview),
        ("4", "Hand Hygiene Educational Material", MaterialType::Pdf, MaterialCategory::GeneralAwareness, Language::Both, "ASHA Worker Meera", 30, "1.2 MB", MaterialStatus::Draft),
    ]
    .into_iter()
    .map(|(id, title, material_type, category, language, uploaded_by, day, size, status)| IecMaterial {
        id: id.to_string(),
        title: title.to_string(),
        material_type,
        category,
        language,
        uploaded_by: uploaded_by.to_string(),
        upload_date: date(2024, 1, day),
        file_size: size.to_string(),
        status,
    })
    .collect()
}

fn facilities() -> Vec<Facility> {
    [
        (1, "Primary Health Center - Sector 12", "PHC", "Sector 12, Chandigarh", 150, 98, 12),
        (2, "Sub Center - Sector 8", "Sub Center", "Sector 8, Chandigarh", 80, 65, 6),
        (3, "Community Health Center - Sector 16", "CHC", "Sector 16, Chandigarh", 200, 145, 18),
        (4, "District Hospital", "District Hospital", "Sector 32, Chandigarh", 500, 380, 45),
    ]
    .into_iter()
    .map(|(id, name, facility_type, location, capacity, current_load, staff)| Facility {
        id,
        name: name.to_string(),
        facility_type: facility_type.to_string(),
        location: location.to_string(),
        capacity,
        current_load,
        staff,
        active: true,
    })
    .collect()
}

fn alert(
    id: u32,
    kind: AlertKind,
    title: &str,
    message: &str,
    time: &str,
    priority: AlertPriority,
    status: AlertStatus,
) -> Alert {
    Alert {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        priority,
        status,
    }
}

fn alerts() -> Vec<Alert> {
    vec![
        alert(
            1,
            AlertKind::HighRisk,
            "High-Risk Beneficiary Alert",
            "Priya Sharma (ID: BEN001) has missed 3 consecutive nutrition supplements",
            "2 minutes ago",
            AlertPriority::High,
            AlertStatus::Active,
        ),
        alert(
            2,
            AlertKind::Medical,
            "Teleconsultation Pending",
            "Dr. Kumar has 5 pending teleconsultations for today",
            "15 minutes ago",
            AlertPriority::Medium,
            AlertStatus::Active,
        ),
        alert(
            3,
            AlertKind::System,
            "Low Stock Alert",
            "Iron tablets running low at Sector 12 Health Center",
            "1 hour ago",
            AlertPriority::Medium,
            AlertStatus::Active,
        ),
        alert(
            4,
            AlertKind::Compliance,
            "Compliance Check Required",
            "Monthly nutrition data entry pending for 3 facilities",
            "2 hours ago",
            AlertPriority::Low,
            AlertStatus::Resolved,
        ),
    ]
}

fn notifications() -> Vec<Alert> {
    vec![
        alert(
            1,
            AlertKind::HighRisk,
            "High-Risk Alert",
            "15 beneficiaries marked high-risk in Shimla district",
            "2 mins ago",
            AlertPriority::Urgent,
            AlertStatus::Active,
        ),
        alert(
            2,
            AlertKind::MissedIntake,
            "Missed Intakes",
            "23 beneficiaries missed iron tablet intake today",
            "15 mins ago",
            AlertPriority::Medium,
            AlertStatus::Active,
        ),
        alert(
            3,
            AlertKind::Teleconsultation,
            "Pending Teleconsultations",
            "8 teleconsultations scheduled for next hour",
            "30 mins ago",
            AlertPriority::Low,
            AlertStatus::Active,
        ),
        alert(
            4,
            AlertKind::System,
            "System Update",
            "Monthly data sync completed successfully",
            "1 hour ago",
            AlertPriority::Info,
            AlertStatus::Active,
        ),
    ]
}

fn reports() -> Vec<Report> {
    [
        (1, "Monthly Nutrition Report", "Nutrition", "March 2024", Some("2.3 MB")),
        (2, "Beneficiary Coverage Report", "Coverage", "Q1 2024", Some("1.8 MB")),
        (3, "High-Risk Analysis", "Analysis", "March 2024", None),
        (4, "Facility Performance Report", "Performance", "March 2024", Some("3.1 MB")),
    ]
    .into_iter()
    .map(|(id, name, report_type, period, size)| Report {
        id,
        name: name.to_string(),
        report_type: report_type.to_string(),
        period: period.to_string(),
        status: if size.is_some() {
            ReportStatus::Ready
        } else {
            ReportStatus::Generating
        },
        size: size.map(str::to_string),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_are_valid() {
        let repo = InMemorySampleRepository::new();
        let epoch = NaiveDate::default();
        let mut dates = Vec::new();

        for b in repo.beneficiaries() {
            dates.push(b.last_update);
            dates.extend(b.last_visit);
            dates.extend(b.last_checkup);
        }
        for c in repo.high_risk_cases() {
            dates.push(c.date_flagged);
            dates.push(c.last_visit);
        }
        dates.extend(repo.intake_records().iter().map(|r| r.date));
        dates.extend(repo.diagnostic_results().iter().map(|d| d.date));
        dates.extend(repo.iec_materials().iter().map(|m| m.upload_date));

        let lifecycle = repo.lifecycle("NHM001").unwrap();
        dates.push(lifecycle.registration_date);
        dates.extend(lifecycle.events.iter().map(|e| e.date));

        assert_eq!(dates.len(), 3 + 3 + 10 + 4 + 5 + 4 + 1 + 5);
        assert!(dates.iter().all(|d| *d != epoch));
    }

    #[test]
    fn test_ids_are_unique() {
        let repo = InMemorySampleRepository::new();
        let mut ids: Vec<String> = repo.beneficiaries().into_iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), repo.beneficiaries().len());

        let mut ids: Vec<String> = repo.high_risk_cases().into_iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_each_call_is_a_fresh_copy() {
        let repo = InMemorySampleRepository::new();
        let mut first = repo.iec_materials();
        first.clear();
        assert_eq!(repo.iec_materials().len(), 4);
    }

    #[test]
    fn test_lifecycle_covers_every_event_kind() {
        let lifecycle = InMemorySampleRepository::new().lifecycle("NHM001").unwrap();
        let kinds: Vec<&str> = lifecycle.events.iter().map(|e| e.details.kind()).collect();
        assert_eq!(kinds, ["registration", "nutrition", "diagnostic", "risk", "followup"]);
        assert!(matches!(lifecycle.events[0].details, EventDetails::Registration { .. }));
    }

    #[test]
    fn test_reports_status_follows_size() {
        let reports = InMemorySampleRepository::new().reports();
        assert_eq!(reports.iter().filter(|r| r.is_downloadable()).count(), 3);
        assert_eq!(reports[2].status, ReportStatus::Generating);
    }
}
