// IEC material service - Material library with local publish
use crate::application::sample_repository::SampleRepository;
use crate::domain::filter::FilterState;
use crate::domain::iec::{self, IecMaterial, MaterialCounts};
use crate::error::DashboardError;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct IecPage {
    pub materials: Vec<IecMaterial>,
    pub counts: MaterialCounts,
}

/// Owns the library page's working copy of the materials. Publishing edits
/// this copy only; it starts over from the samples on restart.
#[derive(Clone)]
pub struct IecService {
    materials: Arc<RwLock<Vec<IecMaterial>>>,
}

impl IecService {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self {
            materials: Arc::new(RwLock::new(repository.iec_materials())),
        }
    }

    pub fn list(&self, filter: &FilterState) -> IecPage {
        let materials = self.materials.read().unwrap_or_else(PoisonError::into_inner);
        IecPage {
            counts: MaterialCounts::tally(materials.iter()),
            materials: filter.apply_cloned(&materials),
        }
    }

    pub fn publish(&self, id: &str) -> Result<IecMaterial, DashboardError> {
        let mut materials = self.materials.write().unwrap_or_else(PoisonError::into_inner);
        if !iec::publish(&mut materials, id) {
            tracing::warn!("Cannot publish unknown material: {}", id);
            return Err(DashboardError::not_found("material", id));
        }
        tracing::info!("Published IEC material {}", id);
        materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| DashboardError::not_found("material", id))
    }
}
