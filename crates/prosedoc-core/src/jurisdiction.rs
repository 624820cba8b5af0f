//! Court jurisdiction catalog and search.
//!
//! The catalog is a fixed list of state court systems followed by the federal
//! district courts and the special federal courts. Entries carry only a
//! display name; whether a court is federal is derived from the name.

use std::sync::LazyLock;

/// Prefix shared by every federal court name in the catalog.
pub const FEDERAL_MARKER: &str = "U.S.";

const STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    "District of Columbia",
];

const FEDERAL_COURTS: &[&str] = &[
    "U.S. District Court - Northern District of Alabama",
    "U.S. District Court - Middle District of Alabama",
    "U.S. District Court - Southern District of Alabama",
    "U.S. District Court - District of Alaska",
    "U.S. District Court - District of Arizona",
    "U.S. District Court - Eastern District of Arkansas",
    "U.S. District Court - Western District of Arkansas",
    "U.S. District Court - Central District of California",
    "U.S. District Court - Eastern District of California",
    "U.S. District Court - Northern District of California",
    "U.S. District Court - Southern District of California",
    "U.S. District Court - District of Colorado",
    "U.S. District Court - District of Connecticut",
    "U.S. District Court - District of Delaware",
    "U.S. District Court - District of Columbia",
    "U.S. District Court - Middle District of Florida",
    "U.S. District Court - Northern District of Florida",
    "U.S. District Court - Southern District of Florida",
    "U.S. District Court - Middle District of Georgia",
    "U.S. District Court - Northern District of Georgia",
    "U.S. District Court - Southern District of Georgia",
    "U.S. District Court - District of Hawaii",
    "U.S. District Court - District of Idaho",
    "U.S. District Court - Central District of Illinois",
    "U.S. District Court - Northern District of Illinois",
    "U.S. District Court - Southern District of Illinois",
    "U.S. District Court - Northern District of Indiana",
    "U.S. District Court - Southern District of Indiana",
    "U.S. District Court - Northern District of Iowa",
    "U.S. District Court - Southern District of Iowa",
    "U.S. District Court - District of Kansas",
    "U.S. District Court - Eastern District of Kentucky",
    "U.S. District Court - Western District of Kentucky",
    "U.S. District Court - Eastern District of Louisiana",
    "U.S. District Court - Middle District of Louisiana",
    "U.S. District Court - Western District of Louisiana",
    "U.S. District Court - 10th District Court of Louisiana Natchitoches",
    "U.S. District Court - District of Maine",
    "U.S. District Court - District of Maryland",
    "U.S. District Court - District of Massachusetts",
    "U.S. District Court - Eastern District of Michigan",
    "U.S. District Court - Western District of Michigan",
    "U.S. District Court - District of Minnesota",
    "U.S. District Court - Northern District of Mississippi",
    "U.S. District Court - Southern District of Mississippi",
    "U.S. District Court - Eastern District of Missouri",
    "U.S. District Court - Western District of Missouri",
    "U.S. District Court - District of Montana",
    "U.S. District Court - District of Nebraska",
    "U.S. District Court - District of Nevada",
    "U.S. District Court - District of New Hampshire",
    "U.S. District Court - District of New Jersey",
    "U.S. District Court - District of New Mexico",
    "U.S. District Court - Eastern District of New York",
    "U.S. District Court - Northern District of New York",
    "U.S. District Court - Southern District of New York",
    "U.S. District Court - Western District of New York",
    "U.S. District Court - Eastern District of North Carolina",
    "U.S. District Court - Middle District of North Carolina",
    "U.S. District Court - Western District of North Carolina",
    "U.S. District Court - District of North Dakota",
    "U.S. District Court - Northern District of Ohio",
    "U.S. District Court - Southern District of Ohio",
    "U.S. District Court - Eastern District of Oklahoma",
    "U.S. District Court - Northern District of Oklahoma",
    "U.S. District Court - Western District of Oklahoma",
    "U.S. District Court - District of Oregon",
    "U.S. District Court - Eastern District of Pennsylvania",
    "U.S. District Court - Middle District of Pennsylvania",
    "U.S. District Court - Western District of Pennsylvania",
    "U.S. District Court - District of Puerto Rico",
    "U.S. District Court - District of Rhode Island",
    "U.S. District Court - District of South Carolina",
    "U.S. District Court - District of South Dakota",
    "U.S. District Court - Eastern District of Tennessee",
    "U.S. District Court - Middle District of Tennessee",
    "U.S. District Court - Western District of Tennessee",
    "U.S. District Court - Eastern District of Texas",
    "U.S. District Court - Northern District of Texas",
    "U.S. District Court - Southern District of Texas",
    "U.S. District Court - Western District of Texas",
    "U.S. District Court - District of Utah",
    "U.S. District Court - District of Vermont",
    "U.S. District Court - Eastern District of Virginia",
    "U.S. District Court - Western District of Virginia",
    "U.S. District Court - Eastern District of Washington",
    "U.S. District Court - Western District of Washington",
    "U.S. District Court - Northern District of West Virginia",
    "U.S. District Court - Southern District of West Virginia",
    "U.S. District Court - Eastern District of Wisconsin",
    "U.S. District Court - Western District of Wisconsin",
    "U.S. District Court - District of Wyoming",
    "U.S. Court of Federal Claims",
    "U.S. Tax Court",
    "U.S. Court of International Trade",
    "U.S. Bankruptcy Court",
];

static CATALOG: LazyLock<Vec<JurisdictionEntry>> = LazyLock::new(|| {
    STATES
        .iter()
        .chain(FEDERAL_COURTS)
        .map(|&name| JurisdictionEntry { name })
        .collect()
});

/// Whether a court belongs to a state system or the federal judiciary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JurisdictionKind {
    State,
    Federal,
}

impl JurisdictionKind {
    /// Classify a jurisdiction by name: federal iff it starts with [`FEDERAL_MARKER`].
    pub fn classify(name: &str) -> Self {
        if name.starts_with(FEDERAL_MARKER) {
            Self::Federal
        } else {
            Self::State
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Federal => "federal",
        }
    }
}

/// A selectable court system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JurisdictionEntry {
    pub name: &'static str,
}

impl JurisdictionEntry {
    pub fn kind(&self) -> JurisdictionKind {
        JurisdictionKind::classify(self.name)
    }
}

/// The full jurisdiction catalog: states first, then federal courts.
pub fn catalog() -> &'static [JurisdictionEntry] {
    &CATALOG
}

/// Filter `entries` by case-insensitive substring match on the name.
///
/// An empty query returns every entry. Catalog order is preserved either way.
pub fn filter(entries: &[JurisdictionEntry], query: &str) -> Vec<JurisdictionEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Exact-name lookup in the catalog.
pub fn find(name: &str) -> Option<JurisdictionEntry> {
    catalog().iter().find(|entry| entry.name == name).copied()
}
