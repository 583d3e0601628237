// Domain layer - Record types, filter core and dashboard models
pub mod alert;
pub mod beneficiary;
pub mod dashboard;
pub mod diagnostic;
pub mod facility;
pub mod filter;
pub mod high_risk;
pub mod iec;
pub mod lifecycle;
pub mod navigation;
pub mod nutrition;
pub mod report;
pub mod widgets;
