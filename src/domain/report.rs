// Generated report domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportStatus {
    Ready,
    Generating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u32,
    pub name: String,
    pub report_type: String,
    pub period: String,
    pub status: ReportStatus,
    /// File size as displayed; `None` while the report is still generating.
    pub size: Option<String>,
}

impl Report {
    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Ready && self.size.is_some()
    }
}
