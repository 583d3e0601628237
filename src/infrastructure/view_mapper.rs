// Mapper to convert service pages to JSON views
use crate::application::beneficiary_service::{BeneficiaryPage, HighRiskPage};
use crate::application::dashboard_service::{AlertsPage, FacilitiesPage};
use crate::application::health_service::{DiagnosticsPage, NutritionPage};
use crate::application::iec_service::IecPage;
use crate::domain::alert::{Alert, AlertCounts};
use crate::domain::beneficiary::{Beneficiary, RiskStatus};
use crate::domain::dashboard::{Dashboard, DistrictCoverage, MonitoringDashboard, ScopeLevel};
use crate::domain::diagnostic::DiagnosticResult;
use crate::domain::facility::{Facility, LoadLevel};
use crate::domain::high_risk::{HighRiskCase, PriorityCounts, RiskType};
use crate::domain::iec::{IecMaterial, MaterialCounts};
use crate::domain::lifecycle::{Lifecycle, TimelineEvent};
use crate::domain::navigation::{self, NavItem, Page};
use crate::domain::nutrition::{IntakeCounts, IntakeRecord};
use crate::domain::widgets::{ChartData, KpiTile};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the beneficiary table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRow {
    pub id: String,
    pub name: String,
    /// e.g. "28/F"
    pub age_gender: String,
    pub facility: String,
    pub risk_status: RiskStatus,
    pub risk_badge: String,
    pub last_update: NaiveDate,
}

/// Profile panel: the record plus the flags the panel highlights.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryProfile {
    #[serde(flatten)]
    pub beneficiary: Beneficiary,
    pub initial: Option<char>,
    pub last_seen: Option<NaiveDate>,
    pub hemoglobin_low: bool,
    pub blood_sugar_high: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryPageView {
    pub beneficiaries: Vec<BeneficiaryRow>,
    pub showing: usize,
    pub total: usize,
    pub selected: Option<BeneficiaryProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskCaseView {
    #[serde(flatten)]
    pub case: HighRiskCase,
    pub risk_type: RiskType,
    pub risk_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskPageView {
    pub cases: Vec<HighRiskCaseView>,
    pub counts: PriorityCounts,
    pub selected: Option<HighRiskCaseView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleView {
    pub beneficiary_id: String,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub registration_date: NaiveDate,
    pub events: Vec<TimelineEvent>,
    pub flagged: usize,
    pub next_pending: Option<TimelineEvent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPageView {
    pub records: Vec<IntakeRecord>,
    pub counts: IntakeCounts,
}

/// A chart plus the axes a client needs to draw it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    #[serde(flatten)]
    pub chart: ChartData,
    pub labels: Vec<String>,
    pub y_max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub scope: Vec<ScopeLevel>,
    pub tiles: Vec<KpiTile>,
    pub charts: Vec<ChartView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringView {
    #[serde(flatten)]
    pub dashboard: DashboardView,
    pub notifications: Vec<Alert>,
    pub districts: Vec<DistrictCoverage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRow {
    #[serde(flatten)]
    pub result: DiagnosticResult,
    /// Down arrow beside the status badge.
    pub trending_down: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsPageView {
    pub results: Vec<DiagnosticRow>,
    pub showing: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IecPageView {
    pub materials: Vec<IecMaterial>,
    pub counts: MaterialCounts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityView {
    #[serde(flatten)]
    pub facility: Facility,
    pub load_percentage: u32,
    pub load_level: LoadLevel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesPageView {
    pub facilities: Vec<FacilityView>,
    pub total_capacity: u32,
    pub total_load: u32,
    pub total_staff: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsPageView {
    pub alerts: Vec<Alert>,
    pub counts: AlertCounts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    pub path: &'static str,
    pub page: Page,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPageView {
    pub path: String,
    pub page: Page,
    pub breadcrumb: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub sidebar: Vec<NavItem>,
    pub routes: Vec<RouteView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentPageView>,
}

pub fn beneficiary_row(beneficiary: &Beneficiary) -> BeneficiaryRow {
    BeneficiaryRow {
        id: beneficiary.id.clone(),
        name: beneficiary.name.clone(),
        age_gender: format!("{}/{}", beneficiary.age, beneficiary.gender.initial()),
        facility: beneficiary.facility.clone(),
        risk_status: beneficiary.risk_status,
        risk_badge: beneficiary.risk_status.as_str().to_uppercase(),
        last_update: beneficiary.last_update,
    }
}

pub fn beneficiary_profile(beneficiary: Beneficiary) -> BeneficiaryProfile {
    BeneficiaryProfile {
        initial: beneficiary.initial(),
        last_seen: beneficiary.last_seen(),
        hemoglobin_low: beneficiary.readings.is_hemoglobin_low(),
        blood_sugar_high: beneficiary.readings.is_blood_sugar_high(),
        beneficiary,
    }
}

pub fn beneficiary_page_to_view(page: BeneficiaryPage) -> BeneficiaryPageView {
    let beneficiaries: Vec<BeneficiaryRow> = page.beneficiaries.iter().map(beneficiary_row).collect();

    BeneficiaryPageView {
        showing: beneficiaries.len(),
        beneficiaries,
        total: page.total,
        selected: page.selected.map(beneficiary_profile),
    }
}

fn case_to_view(case: HighRiskCase) -> HighRiskCaseView {
    let risk_type = case.risk_type();
    HighRiskCaseView {
        case,
        risk_type,
        risk_label: risk_type.label(),
    }
}

pub fn high_risk_page_to_view(page: HighRiskPage) -> HighRiskPageView {
    HighRiskPageView {
        cases: page.cases.into_iter().map(case_to_view).collect(),
        counts: page.counts,
        selected: page.selected.map(case_to_view),
    }
}

/// Timeline in date order, with the flagged count and the next open step.
pub fn lifecycle_to_view(lifecycle: Lifecycle) -> LifecycleView {
    let events: Vec<TimelineEvent> = lifecycle.chronological().into_iter().cloned().collect();
    let flagged = lifecycle.flagged().count();
    let next_pending = lifecycle.next_pending().cloned();

    LifecycleView {
        beneficiary_id: lifecycle.beneficiary_id,
        name: lifecycle.name,
        age: lifecycle.age,
        location: lifecycle.location,
        registration_date: lifecycle.registration_date,
        events,
        flagged,
        next_pending,
    }
}

pub fn nutrition_page_to_view(page: NutritionPage) -> NutritionPageView {
    NutritionPageView {
        records: page.records,
        counts: page.counts,
    }
}

pub fn chart_to_view(chart: ChartData) -> ChartView {
    ChartView {
        labels: chart.labels().into_iter().map(str::to_string).collect(),
        y_max: chart.y_max(),
        chart,
    }
}

pub fn dashboard_to_view(dashboard: Dashboard) -> DashboardView {
    DashboardView {
        title: dashboard.title,
        subtitle: dashboard.subtitle,
        scope: dashboard.scope,
        tiles: dashboard.tiles,
        charts: dashboard.charts.into_iter().map(chart_to_view).collect(),
    }
}

pub fn monitoring_to_view(monitoring: MonitoringDashboard) -> MonitoringView {
    MonitoringView {
        dashboard: dashboard_to_view(monitoring.dashboard),
        notifications: monitoring.notifications,
        districts: monitoring.districts,
    }
}

fn diagnostic_row(result: DiagnosticResult) -> DiagnosticRow {
    DiagnosticRow {
        trending_down: result.status.is_trending_down(),
        result,
    }
}

pub fn diagnostics_page_to_view(page: DiagnosticsPage) -> DiagnosticsPageView {
    DiagnosticsPageView {
        showing: page.results.len(),
        results: page.results.into_iter().map(diagnostic_row).collect(),
        total: page.total,
    }
}

pub fn iec_page_to_view(page: IecPage) -> IecPageView {
    IecPageView {
        materials: page.materials,
        counts: page.counts,
    }
}

pub fn facility_to_view(facility: Facility) -> FacilityView {
    FacilityView {
        load_percentage: facility.load_percentage(),
        load_level: facility.load_level(),
        facility,
    }
}

pub fn facilities_page_to_view(page: FacilitiesPage) -> FacilitiesPageView {
    FacilitiesPageView {
        facilities: page.facilities.into_iter().map(facility_to_view).collect(),
        total_capacity: page.total_capacity,
        total_load: page.total_load,
        total_staff: page.total_staff,
    }
}

pub fn alerts_page_to_view(page: AlertsPage) -> AlertsPageView {
    AlertsPageView {
        alerts: page.alerts,
        counts: page.counts,
    }
}

/// Sidebar and route table; with `path`, also the page it resolves to.
/// `toggle` flips one sidebar group from its default open state.
pub fn navigation_view(path: Option<&str>, toggle: Option<&str>) -> NavigationView {
    let mut sidebar = navigation::sidebar();
    if let Some(title) = toggle {
        if !navigation::toggle_group(&mut sidebar, title) {
            tracing::debug!("No sidebar group named {}", title);
        }
    }
    let current = path.map(|path| CurrentPageView {
        path: path.to_string(),
        page: Page::from_path(path),
        breadcrumb: navigation::breadcrumb(&sidebar, path),
    });

    NavigationView {
        routes: navigation::ROUTES
            .iter()
            .map(|(path, page)| RouteView { path: *path, page: *page })
            .collect(),
        sidebar,
        current,
    }
}
