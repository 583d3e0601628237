// IEC (information, education, communication) material domain model
use super::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialType {
    #[serde(rename = "PDF")]
    Pdf,
    Poster,
    Video,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Pdf => "PDF",
            MaterialType::Poster => "Poster",
            MaterialType::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialCategory {
    Nutrition,
    #[serde(rename = "Child Health")]
    ChildHealth,
    #[serde(rename = "Women Health")]
    WomenHealth,
    #[serde(rename = "General Awareness")]
    GeneralAwareness,
}

impl MaterialCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Nutrition => "Nutrition",
            MaterialCategory::ChildHealth => "Child Health",
            MaterialCategory::WomenHealth => "Women Health",
            MaterialCategory::GeneralAwareness => "General Awareness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    English,
    Hindi,
    Both,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Both => "Both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaterialStatus {
    Draft,
    Published,
    #[serde(rename = "Under Review")]
    UnderReview,
}

impl MaterialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialStatus::Draft => "Draft",
            MaterialStatus::Published => "Published",
            MaterialStatus::UnderReview => "Under Review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IecMaterial {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub category: MaterialCategory,
    pub language: Language,
    pub uploaded_by: String,
    pub upload_date: NaiveDate,
    pub file_size: String,
    pub status: MaterialStatus,
}

impl IecMaterial {
    /// Copy of this material with its status set to Published.
    pub fn published(&self) -> Self {
        Self {
            status: MaterialStatus::Published,
            ..self.clone()
        }
    }
}

impl Filterable for IecMaterial {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.uploaded_by.as_str()]
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "type" => Some(Cow::Borrowed(self.material_type.as_str())),
            "category" => Some(Cow::Borrowed(self.category.as_str())),
            "language" => Some(Cow::Borrowed(self.language.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Replace the material with `id` by its published copy. Returns false when
/// no material has that id; the list is left untouched in that case.
pub fn publish(materials: &mut [IecMaterial], id: &str) -> bool {
    match materials.iter_mut().find(|m| m.id == id) {
        Some(material) => {
            *material = material.published();
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCounts {
    pub total: usize,
    pub published: usize,
    pub under_review: usize,
    pub draft: usize,
}

impl MaterialCounts {
    pub fn tally<'a>(materials: impl IntoIterator<Item = &'a IecMaterial>) -> Self {
        materials.into_iter().fold(Self::default(), |mut counts, m| {
            match m.status {
                MaterialStatus::Published => counts.published += 1,
                MaterialStatus::UnderReview => counts.under_review += 1,
                MaterialStatus::Draft => counts.draft += 1,
            }
            counts.total += 1;
            counts
        })
    }
}
