//! Motion type catalog and per-jurisdiction resolution.
//!
//! Motions fall into three groups: common motions available everywhere,
//! state-specific motions keyed by the states that recognise them, and
//! federal-specific motions available in every federal court.

/// Which jurisdictions a motion type is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Wildcard,
    /// Jurisdiction-name fragments; any one matching as a substring suffices.
    Named(&'static [&'static str]),
}

impl Applicability {
    /// Case-sensitive substring membership test against a jurisdiction name.
    pub fn applies_to(&self, jurisdiction: &str) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Named(names) => names.iter().any(|name| jurisdiction.contains(name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub applicability: Applicability,
}

const fn motion(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    applicability: Applicability,
) -> MotionType {
    MotionType {
        id,
        title,
        description,
        applicability,
    }
}

pub const COMMON_MOTIONS: &[MotionType] = &[
    motion(
        "summary-judgment",
        "Motion for Summary Judgment",
        "Request the court to decide a case without a full trial when there are no disputed facts",
        Applicability::Wildcard,
    ),
    motion(
        "dismiss",
        "Motion to Dismiss",
        "Request to dismiss all or part of a lawsuit for legal insufficiency",
        Applicability::Wildcard,
    ),
    motion(
        "compel-discovery",
        "Motion to Compel Discovery",
        "Request the court to order the opposing party to provide requested information",
        Applicability::Wildcard,
    ),
    motion(
        "continuance",
        "Motion for Continuance",
        "Request to postpone or reschedule a hearing, trial, or other proceeding",
        Applicability::Wildcard,
    ),
    motion(
        "reconsideration",
        "Motion for Reconsideration",
        "Request the court to reconsider a prior decision or order",
        Applicability::Wildcard,
    ),
    motion(
        "expedited-hearing",
        "Motion for Expedited Hearing",
        "Request to have a hearing scheduled sooner than normal procedures allow",
        Applicability::Wildcard,
    ),
    motion(
        "ex-parte",
        "Ex Parte Motion",
        "Emergency motion that can be granted without waiting for a response from the other side",
        Applicability::Wildcard,
    ),
    motion(
        "protective-order",
        "Motion for Protective Order",
        "Request protection from discovery or disclosure of certain information",
        Applicability::Wildcard,
    ),
    motion(
        "sanctions",
        "Motion for Sanctions",
        "Request penalties against a party for violating court rules or procedures",
        Applicability::Wildcard,
    ),
    motion(
        "default-judgment",
        "Motion for Default Judgment",
        "Request judgment when the opposing party fails to respond to a complaint",
        Applicability::Wildcard,
    ),
];

pub const STATE_MOTIONS: &[MotionType] = &[
    motion(
        "anti-slapp",
        "Anti-SLAPP Motion",
        "Motion to strike a complaint that targets free speech on public issues",
        Applicability::Named(&[
            "California",
            "Texas",
            "New York",
            "Florida",
            "Oregon",
            "Washington",
        ]),
    ),
    motion(
        "demurrer",
        "Demurrer",
        "Challenge to the legal sufficiency of a complaint (similar to motion to dismiss)",
        Applicability::Named(&["California"]),
    ),
    motion(
        "special-motion-to-strike",
        "Special Motion to Strike",
        "Seek dismissal of claims that arise from protected activity",
        Applicability::Named(&["California", "Nevada", "Oregon"]),
    ),
    motion(
        "motion-in-limine",
        "Motion in Limine",
        "Request to exclude certain evidence before trial begins",
        Applicability::Wildcard,
    ),
    motion(
        "rule-120-hearing",
        "Rule 120 Hearing Motion",
        "Request for hearing in foreclosure proceedings",
        Applicability::Named(&["Colorado"]),
    ),
];

pub const FEDERAL_MOTIONS: &[MotionType] = &[
    motion(
        "rule-12b6",
        "Rule 12(b)(6) Motion to Dismiss",
        "Motion to dismiss for failure to state a claim upon which relief can be granted",
        Applicability::Wildcard,
    ),
    motion(
        "summary-adjudication",
        "Motion for Summary Adjudication",
        "Request judgment on specific issues without resolving the entire case",
        Applicability::Wildcard,
    ),
    motion(
        "preliminary-injunction",
        "Motion for Preliminary Injunction",
        "Request court order requiring party to do or refrain from certain acts pending litigation",
        Applicability::Wildcard,
    ),
    motion(
        "tro",
        "Motion for Temporary Restraining Order (TRO)",
        "Request immediate but temporary order to prevent irreparable harm",
        Applicability::Wildcard,
    ),
    motion(
        "class-certification",
        "Motion for Class Certification",
        "Request to certify a lawsuit as a class action",
        Applicability::Wildcard,
    ),
    motion(
        "remand",
        "Motion to Remand",
        "Request to send case back to state court from federal court",
        Applicability::Wildcard,
    ),
    motion(
        "change-venue",
        "Motion for Change of Venue",
        "Request to transfer case to another district or division",
        Applicability::Wildcard,
    ),
];

/// Loose federal-court test used for motion selection.
///
/// Matches `"u.s."` or `"district court"` anywhere in the name, ignoring case.
/// This is deliberately not [`JurisdictionKind::classify`](crate::JurisdictionKind::classify),
/// which only looks at the `"U.S."` prefix.
pub fn is_federal_court(jurisdiction: &str) -> bool {
    let lower = jurisdiction.to_lowercase();
    lower.contains("u.s.") || lower.contains("district court")
}

/// Motion types available in `jurisdiction`, common motions first.
pub fn motions_for(jurisdiction: &str) -> Vec<&'static MotionType> {
    let mut motions: Vec<&'static MotionType> = COMMON_MOTIONS.iter().collect();
    if is_federal_court(jurisdiction) {
        motions.extend(FEDERAL_MOTIONS);
    } else {
        motions.extend(
            STATE_MOTIONS
                .iter()
                .filter(|m| m.applicability.applies_to(jurisdiction)),
        );
    }
    motions
}

/// Look up a motion type by id across all groups.
pub fn find_motion(id: &str) -> Option<&'static MotionType> {
    COMMON_MOTIONS
        .iter()
        .chain(STATE_MOTIONS)
        .chain(FEDERAL_MOTIONS)
        .find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(motions: &[&MotionType]) -> Vec<&'static str> {
        motions.iter().map(|m| m.id).collect()
    }

    fn common_ids() -> Vec<&'static str> {
        COMMON_MOTIONS.iter().map(|m| m.id).collect()
    }

    #[test]
    fn ids_are_unique_across_groups() {
        let all: Vec<&str> = COMMON_MOTIONS
            .iter()
            .chain(STATE_MOTIONS)
            .chain(FEDERAL_MOTIONS)
            .map(|m| m.id)
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all.len(), 22);
    }

    #[test]
    fn common_motions_always_included() {
        for jurisdiction in ["", "California", "Atlantis", "U.S. Tax Court"] {
            let result = ids(&motions_for(jurisdiction));
            assert_eq!(result[..COMMON_MOTIONS.len()], common_ids()[..]);
        }
    }

    #[test]
    fn federal_district_gets_common_and_federal_exactly() {
        let result = ids(&motions_for("U.S. District Court - District of Oregon"));
        let expected: Vec<&str> = COMMON_MOTIONS
            .iter()
            .chain(FEDERAL_MOTIONS)
            .map(|m| m.id)
            .collect();
        assert_eq!(result, expected);
        assert!(!result.contains(&"anti-slapp"));
        assert!(!result.contains(&"motion-in-limine"));
    }

    #[test]
    fn california_gets_its_state_motions() {
        let result = ids(&motions_for("California"));
        for id in [
            "anti-slapp",
            "demurrer",
            "special-motion-to-strike",
            "motion-in-limine",
        ] {
            assert!(result.contains(&id), "missing {id}");
        }
        assert!(!result.contains(&"rule-120-hearing"));
        assert!(!result.contains(&"rule-12b6"));
    }

    #[test]
    fn state_motions_keep_catalog_order() {
        let result = ids(&motions_for("Oregon"));
        assert_eq!(
            result[COMMON_MOTIONS.len()..],
            ["anti-slapp", "special-motion-to-strike", "motion-in-limine"]
        );
    }

    #[test]
    fn unknown_jurisdiction_falls_through_to_wildcard_state_motions() {
        let result = ids(&motions_for("Atlantis"));
        assert_eq!(result.len(), COMMON_MOTIONS.len() + 1);
        assert_eq!(result.last(), Some(&"motion-in-limine"));
    }

    #[test]
    fn federal_heuristic_is_looser_than_prefix_classification() {
        assert!(is_federal_court("u.s. bankruptcy court"));
        assert!(is_federal_court("Second District Court of Appeal"));
        assert!(!is_federal_court("District of Columbia"));
    }

    #[test]
    fn state_matching_is_case_sensitive() {
        assert!(Applicability::Named(&["Colorado"]).applies_to("Colorado"));
        assert!(!Applicability::Named(&["Colorado"]).applies_to("colorado"));
    }

    #[test]
    fn find_motion_searches_every_group() {
        assert_eq!(find_motion("dismiss").map(|m| m.title), Some("Motion to Dismiss"));
        assert_eq!(find_motion("demurrer").map(|m| m.title), Some("Demurrer"));
        assert_eq!(
            find_motion("tro").map(|m| m.title),
            Some("Motion for Temporary Restraining Order (TRO)")
        );
        assert!(find_motion("nope").is_none());
    }
}
