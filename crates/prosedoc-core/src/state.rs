//! Application state for one drafting session.
//!
//! Holds the wizard selections, the documents and exhibits assembled so far,
//! and the editor draft. All mutation goes through the setters below.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::document::DocumentType;
use crate::error::CoreError;
use crate::jurisdiction;
use crate::motion::{MotionType, motions_for};
use crate::prompt::DocumentGenerationRequest;

/// The motion type chosen for the current draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionSelection {
    pub id: String,
    pub title: String,
}

impl From<&MotionType> for MotionSelection {
    fn from(motion: &MotionType) -> Self {
        Self {
            id: motion.id.to_string(),
            title: motion.title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            kind: kind.into(),
            title: title.into(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a [`Document`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhibit {
    pub id: String,
    pub label: String,
    pub title: String,
    pub content: String,
}

/// Partial update for an [`Exhibit`].
#[derive(Debug, Clone, Default)]
pub struct ExhibitPatch {
    pub label: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Identifies one outstanding generation request.
///
/// Tickets issued before the last [`AppState::cancel_pending`] are stale and
/// their responses are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    epoch: u64,
}

/// Outcome of applying a generation response to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftUpdate {
    Applied,
    /// Empty content; the previous draft is kept.
    SoftMiss,
    /// The ticket was cancelled; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct AppState {
    jurisdiction: String,
    document_type: Option<DocumentType>,
    motion_type: Option<MotionSelection>,
    documents: Vec<Document>,
    exhibits: Vec<Exhibit>,
    current_document_id: Option<String>,
    draft: Option<String>,
    epoch: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Selections ──

    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn set_jurisdiction(&mut self, jurisdiction: impl Into<String>) {
        self.jurisdiction = jurisdiction.into();
    }

    /// Select a jurisdiction from the catalog by exact name.
    pub fn select_jurisdiction(&mut self, name: &str) -> Result<(), CoreError> {
        let entry = jurisdiction::find(name)
            .ok_or_else(|| CoreError::UnknownJurisdiction(name.to_string()))?;
        self.jurisdiction = entry.name.to_string();
        Ok(())
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        self.document_type
    }

    /// Set the document type. A motion type selection only survives while the
    /// new type is a motion.
    pub fn set_document_type(&mut self, document_type: Option<DocumentType>) {
        self.document_type = document_type;
        if !document_type.is_some_and(|t| t.requires_motion_type()) {
            self.motion_type = None;
        }
    }

    pub fn motion_type(&self) -> Option<&MotionSelection> {
        self.motion_type.as_ref()
    }

    pub fn set_motion_type(&mut self, motion_type: Option<MotionSelection>) {
        self.motion_type = motion_type;
    }

    /// Select a motion type by id; it must be available in the current jurisdiction.
    pub fn select_motion(&mut self, id: &str) -> Result<&MotionSelection, CoreError> {
        let motion = motions_for(&self.jurisdiction)
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::MotionNotApplicable {
                id: id.to_string(),
                jurisdiction: self.jurisdiction.clone(),
            })?;
        Ok(self.motion_type.insert(MotionSelection::from(motion)))
    }

    pub fn current_document_id(&self) -> Option<&str> {
        self.current_document_id.as_deref()
    }

    pub fn set_current_document_id(&mut self, id: Option<String>) {
        self.current_document_id = id;
    }

    // ── Documents ──

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Apply `patch` to the document with `id` and bump its `updated_at`.
    pub fn update_document(&mut self, id: &str, patch: DocumentPatch) -> Result<(), CoreError> {
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::DocumentNotFound(id.to_string()))?;
        if let Some(kind) = patch.kind {
            doc.kind = kind;
        }
        if let Some(title) = patch.title {
            doc.title = title;
        }
        if let Some(content) = patch.content {
            doc.content = content;
        }
        doc.updated_at = Utc::now();
        Ok(())
    }

    /// Remove the document with `id`. Unknown ids are ignored.
    pub fn remove_document(&mut self, id: &str) {
        self.documents.retain(|d| d.id != id);
    }

    // ── Exhibits ──

    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn add_exhibit(&mut self, exhibit: Exhibit) {
        self.exhibits.push(exhibit);
    }

    pub fn update_exhibit(&mut self, id: &str, patch: ExhibitPatch) -> Result<(), CoreError> {
        let exhibit = self
            .exhibits
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::ExhibitNotFound(id.to_string()))?;
        if let Some(label) = patch.label {
            exhibit.label = label;
        }
        if let Some(title) = patch.title {
            exhibit.title = title;
        }
        if let Some(content) = patch.content {
            exhibit.content = content;
        }
        Ok(())
    }

    pub fn remove_exhibit(&mut self, id: &str) {
        self.exhibits.retain(|e| e.id != id);
    }

    // ── Draft and in-flight generation ──

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Replace the draft with user-edited text.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = Some(draft.into());
    }

    /// Issue a ticket for a generation request about to be sent.
    pub fn begin_request(&self) -> RequestTicket {
        RequestTicket { epoch: self.epoch }
    }

    /// Invalidate every outstanding ticket. Called when the user navigates away.
    pub fn cancel_pending(&mut self) {
        self.epoch += 1;
    }

    /// Apply a generation response if its ticket is still current.
    pub fn apply_generated(&mut self, ticket: RequestTicket, content: String) -> DraftUpdate {
        if ticket.epoch != self.epoch {
            debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "discarding stale generation response"
            );
            return DraftUpdate::Stale;
        }
        if content.is_empty() {
            return DraftUpdate::SoftMiss;
        }
        self.draft = Some(content);
        DraftUpdate::Applied
    }

    /// Assemble a drafting request from the current selections.
    ///
    /// Form fields are left empty for the caller to fill in.
    pub fn generation_request(&self) -> DocumentGenerationRequest {
        DocumentGenerationRequest {
            motion_type: self.motion_type.as_ref().map(|m| m.title.clone()),
            ..DocumentGenerationRequest::new(
                self.jurisdiction.clone(),
                self.document_type.map(|t| t.id()).unwrap_or_default(),
            )
        }
    }
}
