// Page routes and sidebar navigation
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Overview,
    BeneficiaryManagement,
    BeneficiaryRegister,
    BeneficiaryLifecycle,
    HighRiskBeneficiaries,
    NutritionMonitoring,
    DiagnosticResults,
    IecMaterials,
    Monitoring,
    Alerts,
    Reports,
    Facilities,
    Settings,
    NotFound,
}

/// Path → page. Several paths may share a page.
pub const ROUTES: &[(&str, Page)] = &[
    ("/", Page::Overview),
    ("/beneficiaries", Page::BeneficiaryManagement),
    ("/beneficiaries/search", Page::BeneficiaryManagement),
    ("/beneficiaries/lifecycle", Page::BeneficiaryLifecycle),
    ("/beneficiaries/high-risk", Page::HighRiskBeneficiaries),
    ("/beneficiaries/register", Page::BeneficiaryRegister),
    ("/health/nutrition", Page::NutritionMonitoring),
    ("/health/medicine", Page::NutritionMonitoring),
    ("/health/diagnostics", Page::DiagnosticResults),
    ("/iec-materials", Page::IecMaterials),
    ("/monitoring", Page::Monitoring),
    ("/alerts", Page::Alerts),
    ("/reports", Page::Reports),
    ("/facilities", Page::Facilities),
    ("/settings", Page::Settings),
];

impl Page {
    /// Resolve a path; a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Page {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        ROUTES
            .iter()
            .find(|(route, _)| *route == trimmed)
            .map(|(_, page)| *page)
            .unwrap_or(Page::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    pub sub_items: Vec<NavLink>,
    pub open: bool,
}

impl NavItem {
    fn link(title: &'static str, url: &'static str) -> Self {
        Self {
            title,
            url: Some(url),
            sub_items: Vec::new(),
            open: false,
        }
    }

    fn group(title: &'static str, sub_items: Vec<NavLink>) -> Self {
        Self {
            title,
            url: None,
            sub_items,
            open: title == DEFAULT_OPEN_GROUP,
        }
    }

    pub fn is_group(&self) -> bool {
        self.url.is_none()
    }
}

pub const DEFAULT_OPEN_GROUP: &str = "Health Monitoring";

/// Sidebar entries in display order.
pub fn sidebar() -> Vec<NavItem> {
    vec![
        NavItem::link("Dashboard", "/"),
        NavItem::group(
            "Beneficiary Management",
            vec![
                NavLink { title: "Search Beneficiaries", url: "/beneficiaries/search" },
                NavLink { title: "Registration", url: "/beneficiaries/register" },
                NavLink { title: "Lifecycle Mapping", url: "/beneficiaries/lifecycle" },
                NavLink { title: "High-Risk Cases", url: "/beneficiaries/high-risk" },
            ],
        ),
        NavItem::link("Monitoring", "/monitoring"),
        NavItem::group(
            "Health Monitoring",
            vec![
                NavLink { title: "Nutrition Tracking", url: "/health/nutrition" },
                NavLink { title: "Medicine Intake", url: "/health/medicine" },
                NavLink { title: "Diagnostic Results", url: "/health/diagnostics" },
            ],
        ),
        NavItem::link("Facilities", "/facilities"),
        NavItem::link("Reports", "/reports"),
        NavItem::link("IEC Materials", "/iec-materials"),
        NavItem::link("Alerts", "/alerts"),
        NavItem::link("Settings", "/settings"),
    ]
}

/// Toggle a sidebar group open/closed. Returns false for unknown titles
/// and plain links.
pub fn toggle_group(items: &mut [NavItem], title: &str) -> bool {
    match items.iter_mut().find(|i| i.title == title && i.is_group()) {
        Some(item) => {
            item.open = !item.open;
            true
        }
        None => false,
    }
}

/// Title trail for a path: group title (if any) followed by the entry title.
/// A path that is not itself a sidebar URL takes the trail of the first
/// sidebar entry for the same page. Empty for paths with no sidebar entry.
pub fn breadcrumb(items: &[NavItem], path: &str) -> Vec<&'static str> {
    let path = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    if let Some(trail) = trail_where(items, |url| url == path) {
        return trail;
    }

    let page = Page::from_path(path);
    if page == Page::NotFound {
        return Vec::new();
    }
    trail_where(items, |url| Page::from_path(url) == page).unwrap_or_default()
}

fn trail_where(items: &[NavItem], hit: impl Fn(&str) -> bool) -> Option<Vec<&'static str>> {
    for item in items {
        if item.url.is_some_and(&hit) {
            return Some(vec![item.title]);
        }
        if let Some(link) = item.sub_items.iter().find(|l| hit(l.url)) {
            return Some(vec![item.title, link.title]);
        }
    }
    None
}
