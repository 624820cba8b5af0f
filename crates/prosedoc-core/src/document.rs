//! Document types a filer can draft, and the editor's fallback template.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Motion,
    Response,
    Order,
    Brief,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [Self::Motion, Self::Response, Self::Order, Self::Brief];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Response => "response",
            Self::Order => "order",
            Self::Brief => "brief",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Motion => "Motion",
            Self::Response => "Response/Opposition",
            Self::Order => "Proposed Order",
            Self::Brief => "Legal Brief",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Motion => {
                "Request the court to make a decision on a specific issue in your case"
            }
            Self::Response => "Respond to a motion filed by another party",
            Self::Order => {
                "Submit a draft order for the judge to sign if they rule in your favor"
            }
            Self::Brief => "Submit a written argument that supports your position",
        }
    }

    /// Only motions go through the motion-type selection step.
    pub fn requires_motion_type(&self) -> bool {
        matches!(self, Self::Motion)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| CoreError::UnknownDocumentType(s.to_string()))
    }
}

/// Caption template shown in the editor until a draft has been generated.
pub fn draft_template(jurisdiction: &str, motion_title: Option<&str>) -> String {
    let title = motion_title
        .filter(|t| !t.is_empty())
        .unwrap_or("[DOCUMENT TITLE]");
    format!(
        "IN THE {court}
[CASE CAPTION]

[PLAINTIFF NAME],                  )  Case No. [CASE NUMBER]
                                   )
                  Plaintiff,       )  [DOCUMENT TITLE]
                                   )
v.                                 )  [Other header information based on local rules]
                                   )
[DEFENDANT NAME],                  )
                                   )
                  Defendant.       )
___________________________________)

{title}

[Document content will appear here after you use the AI Generator]

DATED this [DAY] day of [MONTH], [YEAR].

Respectfully submitted,

________________________
[YOUR NAME]
[YOUR ADDRESS]
[YOUR PHONE]
[YOUR EMAIL]
[Pro Se Litigant or Self-Represented]",
        court = jurisdiction.to_uppercase(),
    )
}
