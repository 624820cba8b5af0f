pub mod compile;
pub mod document;
pub mod error;
pub mod jurisdiction;
pub mod motion;
pub mod prompt;
pub mod state;
pub mod wizard;

pub use compile::{Compilation, CompilationItem, FilingKind};
pub use document::{DocumentType, draft_template};
pub use error::CoreError;
pub use jurisdiction::{JurisdictionEntry, JurisdictionKind};
pub use motion::{Applicability, MotionType, motions_for};
pub use prompt::{DocumentGenerationRequest, build_prompt, build_tips_prompt};
pub use state::{AppState, DraftUpdate, RequestTicket};
pub use wizard::WizardStep;
