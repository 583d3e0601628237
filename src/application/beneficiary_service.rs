// Beneficiary service - Use cases for the beneficiary pages
use crate::application::sample_repository::SampleRepository;
use crate::domain::beneficiary::Beneficiary;
use crate::domain::filter::FilterState;
use crate::domain::high_risk::{HighRiskCase, PriorityCounts};
use crate::domain::lifecycle::Lifecycle;
use crate::error::DashboardError;
use std::sync::Arc;

/// Beneficiary search page: the visible rows and the profile panel.
#[derive(Debug, Clone)]
pub struct BeneficiaryPage {
    pub beneficiaries: Vec<Beneficiary>,
    pub total: usize,
    pub selected: Option<Beneficiary>,
}

/// High-risk page: visible cases plus caseload-wide priority counts.
#[derive(Debug, Clone)]
pub struct HighRiskPage {
    pub cases: Vec<HighRiskCase>,
    pub counts: PriorityCounts,
    pub selected: Option<HighRiskCase>,
}

#[derive(Clone)]
pub struct BeneficiaryService {
    repository: Arc<dyn SampleRepository>,
}

impl BeneficiaryService {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }

    /// Filter the beneficiary list. The profile panel shows `selected` when
    /// it names a known beneficiary, otherwise the first one on record; the
    /// selection does not have to be among the visible rows.
    pub fn search(&self, filter: &FilterState, selected: Option<&str>) -> BeneficiaryPage {
        let all = self.repository.beneficiaries();
        let beneficiaries = filter.apply_cloned(&all);

        let selected = match selected {
            Some(id) => all.iter().find(|b| b.id == id).cloned(),
            None => all.first().cloned(),
        };

        BeneficiaryPage {
            beneficiaries,
            total: all.len(),
            selected,
        }
    }

    pub fn profile(&self, id: &str) -> Result<Beneficiary, DashboardError> {
        self.repository
            .beneficiaries()
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| {
                tracing::warn!("Unknown beneficiary requested: {}", id);
                DashboardError::not_found("beneficiary", id)
            })
    }

    /// Timeline of a registered beneficiary. Unknown ids fail as an unknown
    /// beneficiary; known ones without a timeline as a missing lifecycle.
    pub fn lifecycle(&self, id: &str) -> Result<Lifecycle, DashboardError> {
        self.profile(id)?;
        self.repository.lifecycle(id).ok_or_else(|| {
            tracing::warn!("No lifecycle recorded for: {}", id);
            DashboardError::not_found("lifecycle", id)
        })
    }

    /// High-risk cases page. Nothing is selected unless asked for.
    pub fn high_risk(&self, filter: &FilterState, selected: Option<&str>) -> HighRiskPage {
        let all = self.repository.high_risk_cases();
        let counts = PriorityCounts::tally(&all);
        let cases = filter.apply_cloned(&all);
        let selected = selected.and_then(|id| all.iter().find(|c| c.id == id).cloned());

        HighRiskPage {
            cases,
            counts,
            selected,
        }
    }
}
