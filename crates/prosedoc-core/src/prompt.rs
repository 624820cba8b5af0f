//! Prompt construction for document drafting and jurisdiction tips.

use crate::document::DocumentType;
use crate::error::CoreError;

// ── Prompt templates ──

pub const DRAFTING_SYSTEM_PROMPT: &str = "\
You are an expert legal document drafter specializing in creating court documents for pro se litigants. \
Format documents according to court rules with proper structure, headings, and legal language.";

pub const TIPS_SYSTEM_PROMPT: &str = "\
You are a legal expert specializing in court procedures and document formatting. \
Provide concise, practical tips for document preparation.";

const CLOSING_INSTRUCTION: &str = "\
Please ensure the document is formatted correctly with appropriate headings, sections, \
and legal language suitable for a pro se litigant.";

/// Everything the drafting prompt is built from.
///
/// `jurisdiction` and `document_type` are required; every other field is
/// optional and left out of the prompt when absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentGenerationRequest {
    pub jurisdiction: String,
    pub document_type: String,
    pub motion_type: Option<String>,
    pub case_number: Option<String>,
    pub plaintiff_name: Option<String>,
    pub defendant_name: Option<String>,
    pub filing_party: Option<String>,
    pub case_details: Option<String>,
    pub relief_sought: Option<String>,
    pub legal_basis: Option<String>,
    pub facts: Option<String>,
    pub additional_info: Option<String>,
}

impl DocumentGenerationRequest {
    pub fn new(jurisdiction: impl Into<String>, document_type: impl Into<String>) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            document_type: document_type.into(),
            ..Default::default()
        }
    }

    /// Check the two required fields are non-empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jurisdiction.is_empty() {
            return Err(CoreError::MissingField("jurisdiction"));
        }
        if self.document_type.is_empty() {
            return Err(CoreError::MissingField("document type"));
        }
        Ok(())
    }

    /// Editor form rules on top of [`validate`](Self::validate): a filing party
    /// is always required, and motions must state the relief sought.
    pub fn validate_form(&self) -> Result<(), CoreError> {
        self.validate()?;
        if is_blank(&self.filing_party) {
            return Err(CoreError::MissingField("filing party"));
        }
        if self.document_type == DocumentType::Motion.id() && is_blank(&self.relief_sought) {
            return Err(CoreError::MissingField("relief sought"));
        }
        Ok(())
    }

    /// Labelled optional fields in prompt order.
    fn labelled_fields(&self) -> [(&'static str, &Option<String>); 9] {
        [
            ("Case Number", &self.case_number),
            ("Plaintiff", &self.plaintiff_name),
            ("Defendant", &self.defendant_name),
            ("Filing Party", &self.filing_party),
            ("Case Details", &self.case_details),
            ("Relief Sought", &self.relief_sought),
            ("Legal Basis", &self.legal_basis),
            ("Relevant Facts", &self.facts),
            ("Additional Information", &self.additional_info),
        ]
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Build the user prompt for a drafting request.
pub fn build_prompt(request: &DocumentGenerationRequest) -> String {
    let mut lines = vec![format!(
        "Draft a {} for the jurisdiction of {}.",
        request.document_type, request.jurisdiction
    )];
    if let Some(motion_type) = present(&request.motion_type) {
        lines.push(format!("The specific type of motion is: {motion_type}."));
    }
    for (label, field) in request.labelled_fields() {
        if let Some(value) = present(field) {
            lines.push(format!("{label}: {value}"));
        }
    }
    lines.push(String::new());
    lines.push(CLOSING_INSTRUCTION.to_string());
    lines.join("\n")
}

/// Build the user prompt asking for jurisdiction-specific preparation tips.
pub fn build_tips_prompt(jurisdiction: &str, document_type: &str) -> String {
    format!(
        "Provide 5 specific tips for preparing a {document_type} in {jurisdiction}. \
         Focus on formatting requirements, common pitfalls to avoid, and jurisdiction-specific rules. \
         Keep each tip under 2 sentences."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_request_renders_only_opening_and_closing() {
        let request = DocumentGenerationRequest::new("Texas", "motion");
        assert_eq!(
            build_prompt(&request),
            "Draft a motion for the jurisdiction of Texas.\n\n\
             Please ensure the document is formatted correctly with appropriate headings, \
             sections, and legal language suitable for a pro se litigant."
        );
    }

    #[test]
    fn fields_render_in_fixed_order() {
        let request = DocumentGenerationRequest {
            motion_type: Some("Motion to Dismiss".into()),
            additional_info: Some("Hearing set for May".into()),
            case_number: Some("CV-2025-12345".into()),
            facts: Some("Contract signed in 2023".into()),
            plaintiff_name: Some("Jane Roe".into()),
            defendant_name: Some("Acme LLC".into()),
            ..DocumentGenerationRequest::new("Oregon", "motion")
        };
        assert_eq!(
            build_prompt(&request),
            "Draft a motion for the jurisdiction of Oregon.\n\
             The specific type of motion is: Motion to Dismiss.\n\
             Case Number: CV-2025-12345\n\
             Plaintiff: Jane Roe\n\
             Defendant: Acme LLC\n\
             Relevant Facts: Contract signed in 2023\n\
             Additional Information: Hearing set for May\n\n\
             Please ensure the document is formatted correctly with appropriate headings, \
             sections, and legal language suitable for a pro se litigant."
        );
    }

    #[test]
    fn empty_optional_fields_are_omitted() {
        let request = DocumentGenerationRequest {
            motion_type: Some(String::new()),
            legal_basis: Some(String::new()),
            relief_sought: Some("Dismissal".into()),
            ..DocumentGenerationRequest::new("Utah", "brief")
        };
        let prompt = build_prompt(&request);
        assert!(!prompt.contains("motion is"));
        assert!(!prompt.contains("Legal Basis"));
        assert!(prompt.contains("\nRelief Sought: Dismissal\n"));
    }

    #[test]
    fn validate_requires_jurisdiction_and_type() {
        assert_eq!(
            DocumentGenerationRequest::new("", "motion").validate(),
            Err(CoreError::MissingField("jurisdiction"))
        );
        assert_eq!(
            DocumentGenerationRequest::new("Iowa", "").validate(),
            Err(CoreError::MissingField("document type"))
        );
        assert!(DocumentGenerationRequest::new("Iowa", "order").validate().is_ok());
    }

    #[test]
    fn form_requires_filing_party_and_relief_for_motions() {
        let mut request = DocumentGenerationRequest::new("Iowa", "motion");
        assert_eq!(
            request.validate_form(),
            Err(CoreError::MissingField("filing party"))
        );
        request.filing_party = Some("Plaintiff".into());
        assert_eq!(
            request.validate_form(),
            Err(CoreError::MissingField("relief sought"))
        );
        request.relief_sought = Some("Dismissal".into());
        assert!(request.validate_form().is_ok());

        let order = DocumentGenerationRequest {
            filing_party: Some("Defendant".into()),
            ..DocumentGenerationRequest::new("Iowa", "order")
        };
        assert!(order.validate_form().is_ok());
    }

    #[test]
    fn tips_prompt_names_document_and_jurisdiction() {
        let prompt = build_tips_prompt("Alaska", "brief");
        assert!(prompt.starts_with("Provide 5 specific tips for preparing a brief in Alaska."));
        assert!(prompt.ends_with("Keep each tip under 2 sentences."));
    }
}
