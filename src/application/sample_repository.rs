// Repository trait for the embedded sample records
use crate::domain::alert::Alert;
use crate::domain::beneficiary::Beneficiary;
use crate::domain::dashboard::{DistrictCoverage, ScopeLevel};
use crate::domain::diagnostic::DiagnosticResult;
use crate::domain::facility::Facility;
use crate::domain::high_risk::HighRiskCase;
use crate::domain::iec::IecMaterial;
use crate::domain::lifecycle::Lifecycle;
use crate::domain::nutrition::IntakeRecord;
use crate::domain::report::Report;
use crate::domain::widgets::{ChartData, KpiTile};

/// Source of every list a page renders. Each call hands out a fresh copy, so
/// a page can never disturb another page's records.
pub trait SampleRepository: Send + Sync {
    fn beneficiaries(&self) -> Vec<Beneficiary>;

    /// Timeline for one beneficiary, `None` when none is recorded.
    fn lifecycle(&self, beneficiary_id: &str) -> Option<Lifecycle>;

    fn high_risk_cases(&self) -> Vec<HighRiskCase>;

    fn intake_records(&self) -> Vec<IntakeRecord>;

    fn diagnostic_results(&self) -> Vec<DiagnosticResult>;

    fn iec_materials(&self) -> Vec<IecMaterial>;

    fn facilities(&self) -> Vec<Facility>;

    fn alerts(&self) -> Vec<Alert>;

    /// Short-lived notifications shown on the monitoring page.
    fn notifications(&self) -> Vec<Alert>;

    fn reports(&self) -> Vec<Report>;

    /// KPI tiles for the overview page.
    fn overview_tiles(&self) -> Vec<KpiTile>;

    fn overview_charts(&self) -> Vec<ChartData>;

    /// KPI tiles for the monitoring page.
    fn monitoring_tiles(&self) -> Vec<KpiTile>;

    fn monitoring_charts(&self) -> Vec<ChartData>;

    fn district_coverage(&self) -> Vec<DistrictCoverage>;

    /// Administrative drill-down levels with their default selection.
    fn scope_levels(&self) -> Vec<ScopeLevel>;
}
