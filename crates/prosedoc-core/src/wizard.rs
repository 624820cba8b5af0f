//! Page sequence of the drafting wizard.

use crate::document::DocumentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Jurisdiction,
    DocumentType,
    MotionType,
    Editor,
    Compile,
}

impl WizardStep {
    /// The step after `self`. The motion-type step is only visited for motions.
    ///
    /// Returns `None` from the last step, or from the document-type step when
    /// no document type has been chosen yet.
    pub fn next(self, document_type: Option<DocumentType>) -> Option<Self> {
        match self {
            Self::Jurisdiction => Some(Self::DocumentType),
            Self::DocumentType => document_type.map(|t| {
                if t.requires_motion_type() {
                    Self::MotionType
                } else {
                    Self::Editor
                }
            }),
            Self::MotionType => Some(Self::Editor),
            Self::Editor => Some(Self::Compile),
            Self::Compile => None,
        }
    }

    /// The step the back link leads to. The editor always returns to document
    /// type selection, even for motions.
    pub fn back(self) -> Option<Self> {
        match self {
            Self::Jurisdiction => None,
            Self::DocumentType => Some(Self::Jurisdiction),
            Self::MotionType | Self::Editor => Some(Self::DocumentType),
            Self::Compile => Some(Self::Editor),
        }
    }
}
