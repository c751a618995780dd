//! Built-in site data: menu, contact numbers and site name.

use serde::{Deserialize, Serialize};

use super::item::{build_nav, NavEntry, NavItem};

pub const DEFAULT_SITE_NAME: &str = "CityCare Hospital";

/// A phone number shown in the top bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub label: String,
    pub number: String,
}

pub fn default_contacts() -> Vec<ContactLine> {
    vec![
        ContactLine {
            label: "Emergency".to_string(),
            number: "121".to_string(),
        },
        ContactLine {
            label: "Hospital Lifeline".to_string(),
            number: "7028587790".to_string(),
        },
    ]
}

pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Home"),
        NavEntry::parent(
            "About Us",
            &["Our Story", "Our Team", "Awards", "Careers"],
        ),
        NavEntry::parent(
            "Centers of Excellence",
            &[
                "View All Specialties",
                "Cardiology",
                "Neurology",
                "Gastroenterology",
                "Orthopedic",
                "Oncology",
                "Gynecology",
            ],
        ),
        NavEntry::parent(
            "Patient Care",
            &["Health Checkup", "Book Appointment", "Insurance", "Visitor Guide"],
        ),
        NavEntry::leaf("Doctors"),
        NavEntry::leaf("Contact Us"),
    ]
}

/// The built-in menu.
pub fn default_nav() -> Vec<NavItem> {
    // Built-in entries have no blank labels.
    build_nav(default_entries()).unwrap_or_default()
}

/// Everything the navbar and pages need to know about the site.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteData {
    pub name: String,
    pub contacts: Vec<ContactLine>,
    pub navigation: Vec<NavItem>,
}

impl Default for SiteData {
    fn default() -> Self {
        SiteData {
            name: DEFAULT_SITE_NAME.to_string(),
            contacts: default_contacts(),
            navigation: default_nav(),
        }
    }
}

impl SiteData {
    /// Label of the menu link that resolves to exactly `path`.
    ///
    /// Parents are never linked to, so their own paths have no title.
    pub fn title_for_path(&self, path: &str) -> Option<String> {
        self.navigation.iter().find_map(|item| match item {
            NavItem::Leaf { label, path: own } => (own == path).then(|| label.clone()),
            NavItem::Parent { children, .. } => children
                .iter()
                .find(|child| child.path == path)
                .map(|child| child.label.clone()),
        })
    }
}

/// JSON shape of `GET /api/site`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SitePayload {
    pub name: String,
    pub contacts: Vec<ContactLine>,
    pub navigation: Vec<NavEntry>,
}

impl From<&SiteData> for SitePayload {
    fn from(site: &SiteData) -> Self {
        SitePayload {
            name: site.name.clone(),
            contacts: site.contacts.clone(),
            navigation: site.navigation.iter().map(NavEntry::from).collect(),
        }
    }
}

impl TryFrom<SitePayload> for SiteData {
    type Error = crate::error::SiteError;

    fn try_from(payload: SitePayload) -> Result<Self, Self::Error> {
        Ok(SiteData {
            name: payload.name,
            contacts: payload.contacts,
            navigation: build_nav(payload.navigation)?,
        })
    }
}
