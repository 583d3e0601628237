// Application state for HTTP handlers
use crate::application::beneficiary_service::BeneficiaryService;
use crate::application::dashboard_service::DashboardService;
use crate::application::health_service::HealthService;
use crate::application::iec_service::IecService;
use crate::application::sample_repository::SampleRepository;
use crate::infrastructure::config::DashboardSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub beneficiary_service: BeneficiaryService,
    pub health_service: HealthService,
    pub iec_service: IecService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Wire every service to the same repository.
    pub fn new(repository: Arc<dyn SampleRepository>, settings: DashboardSettings) -> Self {
        Self {
            beneficiary_service: BeneficiaryService::new(repository.clone()),
            health_service: HealthService::new(repository.clone()),
            iec_service: IecService::new(repository.clone()),
            dashboard_service: DashboardService::new(repository, settings),
        }
    }
}
