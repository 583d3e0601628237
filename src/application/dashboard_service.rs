// Dashboard service - Use cases for building the overview, monitoring and directory pages
use crate::application::sample_repository::SampleRepository;
use crate::domain::alert::{Alert, AlertCounts};
use crate::domain::dashboard::{select_scope, Dashboard, MonitoringDashboard};
use crate::domain::facility::Facility;
use crate::domain::report::Report;
use crate::infrastructure::config::DashboardSettings;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FacilitiesPage {
    pub facilities: Vec<Facility>,
    pub total_capacity: u32,
    pub total_load: u32,
    pub total_staff: u32,
}

#[derive(Debug, Clone)]
pub struct AlertsPage {
    pub alerts: Vec<Alert>,
    pub counts: AlertCounts,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SampleRepository>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SampleRepository>, settings: DashboardSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Overview page. `selections` are (level, value) pairs applied to the
    /// administrative drill-down in order; unknown levels or values are
    /// ignored.
    pub fn overview(&self, selections: &[(String, String)]) -> Dashboard {
        let mut scope = self.repository.scope_levels();
        for (level, value) in selections {
            if !select_scope(&mut scope, level, value) {
                tracing::debug!("Ignoring scope selection {}={}", level, value);
            }
        }

        Dashboard::new(
            self.settings.title.clone(),
            "Real-time monitoring of health programs and beneficiary data".to_string(),
            self.repository.overview_tiles(),
            self.repository.overview_charts(),
        )
        .with_scope(scope)
    }

    pub fn monitoring(&self) -> MonitoringDashboard {
        let dashboard = Dashboard::new(
            "Monitoring Dashboard".to_string(),
            "Real-time health monitoring and analytics".to_string(),
            self.repository.monitoring_tiles(),
            self.repository.monitoring_charts(),
        );

        MonitoringDashboard {
            dashboard,
            notifications: self.repository.notifications(),
            districts: self.repository.district_coverage(),
        }
    }

    pub fn facilities(&self) -> FacilitiesPage {
        let facilities = self.repository.facilities();
        FacilitiesPage {
            total_capacity: facilities.iter().map(|f| f.capacity).sum(),
            total_load: facilities.iter().map(|f| f.current_load).sum(),
            total_staff: facilities.iter().map(|f| f.staff).sum(),
            facilities,
        }
    }

    pub fn alerts(&self) -> AlertsPage {
        let alerts = self.repository.alerts();
        AlertsPage {
            counts: AlertCounts::tally(&alerts),
            alerts,
        }
    }

    pub fn reports(&self) -> Vec<Report> {
        self.repository.reports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sample_data::InMemorySampleRepository;

    fn service() -> DashboardService {
        DashboardService::new(
            Arc::new(InMemorySampleRepository::new()),
            DashboardSettings::default(),
        )
    }

    #[test]
    fn test_overview_applies_scope() {
        let selections = vec![
            ("district".to_string(), "Kullu".to_string()),
            ("block".to_string(), "Nowhere".to_string()),
        ];
        let dashboard = service().overview(&selections);
        let district = dashboard.scope.iter().find(|l| l.label == "District").unwrap();
        let block = dashboard.scope.iter().find(|l| l.label == "Block").unwrap();
        assert_eq!(district.value, "Kullu");
        assert_eq!(block.value, "Shimla Rural");
        assert_eq!(dashboard.title, DashboardSettings::default().title);
        assert_eq!(dashboard.tiles.len(), 3);
    }

    #[test]
    fn test_monitoring_page() {
        let monitoring = service().monitoring();
        assert_eq!(monitoring.dashboard.tiles.len(), 4);
        assert_eq!(monitoring.notifications.len(), 4);
        assert_eq!(monitoring.districts.len(), 5);
    }

    #[test]
    fn test_facility_totals() {
        let page = service().facilities();
        assert_eq!(page.total_capacity, 930);
        assert_eq!(page.total_load, 688);
        assert_eq!(page.total_staff, 81);
    }

    #[test]
    fn test_alert_counts() {
        let page = service().alerts();
        assert_eq!(page.counts.active, 3);
        assert_eq!(page.counts.resolved, 1);
    }
}
