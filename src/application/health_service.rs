// Health service - Use cases for nutrition intake and diagnostic pages
use crate::application::sample_repository::SampleRepository;
use crate::domain::diagnostic::DiagnosticResult;
use crate::domain::filter::FilterState;
use crate::domain::nutrition::{IntakeCounts, IntakeRecord};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NutritionPage {
    pub records: Vec<IntakeRecord>,
    pub counts: IntakeCounts,
}

#[derive(Debug, Clone)]
pub struct DiagnosticsPage {
    pub results: Vec<DiagnosticResult>,
    pub total: usize,
}

#[derive(Clone)]
pub struct HealthService {
    repository: Arc<dyn SampleRepository>,
}

impl HealthService {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }

    pub fn nutrition(&self, filter: &FilterState) -> NutritionPage {
        let all = self.repository.intake_records();
        NutritionPage {
            counts: IntakeCounts::tally(&all),
            records: filter.apply_cloned(&all),
        }
    }

    pub fn diagnostics(&self, filter: &FilterState) -> DiagnosticsPage {
        let all = self.repository.diagnostic_results();
        DiagnosticsPage {
            total: all.len(),
            results: filter.apply_cloned(&all),
        }
    }
}
