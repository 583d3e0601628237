// Application layer - Page use cases over the sample repository
pub mod beneficiary_service;
pub mod dashboard_service;
pub mod health_service;
pub mod iec_service;
pub mod sample_repository;
