//! Drafting flow: walk the wizard selections through `AppState`, then
//! generate a draft through the proxy.

use anyhow::{Context, bail};
use prosedoc_ai::GenerationClient;
use prosedoc_core::{AppState, DraftUpdate, RequestTicket, WizardStep, draft_template};
use tracing::{info, warn};

use crate::FormArgs;

/// Run the wizard for `form` and return the resulting draft.
///
/// A soft miss from the proxy leaves the caption template in place. Ctrl-C
/// while the request is in flight cancels it and discards any late response.
pub async fn run(form: &FormArgs, client: &GenerationClient) -> anyhow::Result<String> {
    let mut state = AppState::new();
    let step = select(&mut state, form)?;
    debug_assert_eq!(step, WizardStep::Editor);

    let mut request = state.generation_request();
    form.fill(&mut request);
    request.validate_form()?;

    let ticket = state.begin_request();
    let content = tokio::select! {
        result = client.generate_document_content(&request) => result?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("listening for ctrl-c")?;
            state.cancel_pending();
            bail!("generation cancelled");
        }
    };

    finish(&mut state, ticket, content)
}

/// Hand a generation response to `state` and return the draft to show.
///
/// A response whose ticket was cancelled is rejected without touching the
/// draft.
fn finish(
    state: &mut AppState,
    ticket: RequestTicket,
    content: String,
) -> anyhow::Result<String> {
    match state.apply_generated(ticket, content) {
        DraftUpdate::Applied => info!("draft generated"),
        DraftUpdate::SoftMiss => warn!("generation returned no content; using the template"),
        DraftUpdate::Stale => bail!("generation response arrived after cancellation"),
    }

    let template = || {
        draft_template(
            state.jurisdiction(),
            state.motion_type().map(|m| m.title.as_str()),
        )
    };
    Ok(state.draft().map(str::to_string).unwrap_or_else(template))
}

/// Apply the wizard selections in page order and return the step reached.
fn select(state: &mut AppState, form: &FormArgs) -> anyhow::Result<WizardStep> {
    let mut step = WizardStep::Jurisdiction;
    state.select_jurisdiction(&form.jurisdiction)?;
    step = step.next(None).context("wizard ended early")?;

    state.set_document_type(Some(form.document_type));
    step = step
        .next(state.document_type())
        .context("document type not selected")?;

    if step == WizardStep::MotionType {
        if let Some(id) = &form.motion {
            let motion = state.select_motion(id)?;
            info!(motion = %motion.title, "motion type selected");
        }
        step = step.next(state.document_type()).context("wizard ended early")?;
    } else if form.motion.is_some() {
        warn!(
            document_type = %form.document_type,
            "--motion only applies to motions; ignoring"
        );
    }
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use prosedoc_ai::PROXY_PATH;
    use prosedoc_core::DocumentType;
    use serde_json::{Value, json};

    fn form(jurisdiction: &str, document_type: DocumentType) -> FormArgs {
        FormArgs {
            jurisdiction: jurisdiction.into(),
            document_type,
            motion: None,
            case_number: None,
            plaintiff: None,
            defendant: None,
            filing_party: Some("Plaintiff".into()),
            case_details: None,
            relief_sought: Some("Dismissal".into()),
            legal_basis: None,
            facts: None,
            additional_info: None,
        }
    }

    async fn proxy_answering(body: Value) -> GenerationClient {
        let app = Router::new().route(
            PROXY_PATH,
            post(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        GenerationClient::new(format!("http://{addr}"))
    }

    #[test]
    fn motion_walks_through_motion_type_step() {
        let mut state = AppState::new();
        let mut args = form("California", DocumentType::Motion);
        args.motion = Some("demurrer".into());
        assert_eq!(select(&mut state, &args).unwrap(), WizardStep::Editor);
        assert_eq!(state.motion_type().map(|m| m.title.as_str()), Some("Demurrer"));
    }

    #[test]
    fn motion_outside_jurisdiction_is_rejected() {
        let mut state = AppState::new();
        let mut args = form("Texas", DocumentType::Motion);
        args.motion = Some("demurrer".into());
        assert!(select(&mut state, &args).is_err());
    }

    #[test]
    fn non_motion_ignores_motion_flag() {
        let mut state = AppState::new();
        let mut args = form("Texas", DocumentType::Brief);
        args.motion = Some("demurrer".into());
        assert_eq!(select(&mut state, &args).unwrap(), WizardStep::Editor);
        assert!(state.motion_type().is_none());
    }

    #[test]
    fn unknown_jurisdiction_is_rejected() {
        let mut state = AppState::new();
        assert!(select(&mut state, &form("Atlantis", DocumentType::Order)).is_err());
    }

    #[test]
    fn response_after_cancel_is_discarded() {
        let mut state = AppState::new();
        select(&mut state, &form("Ohio", DocumentType::Motion)).unwrap();
        let ticket = state.begin_request();
        state.cancel_pending();

        let err = finish(&mut state, ticket, "LATE".into()).unwrap_err();
        assert_eq!(err.to_string(), "generation response arrived after cancellation");
        assert!(state.draft().is_none());

        let ticket = state.begin_request();
        assert_eq!(finish(&mut state, ticket, "FRESH".into()).unwrap(), "FRESH");
    }

    #[tokio::test]
    async fn generated_content_becomes_the_draft() {
        let client = proxy_answering(json!({"choices": [{"message": {"content": "DRAFT"}}]})).await;
        let draft = run(&form("Ohio", DocumentType::Motion), &client).await.unwrap();
        assert_eq!(draft, "DRAFT");
    }

    #[tokio::test]
    async fn soft_miss_falls_back_to_template() {
        let client = proxy_answering(json!({})).await;
        let mut args = form("Ohio", DocumentType::Motion);
        args.motion = Some("dismiss".into());
        let draft = run(&args, &client).await.unwrap();
        assert!(draft.starts_with("IN THE OHIO\n"));
        assert!(draft.contains("\n\nMotion to Dismiss\n\n"));
    }

    #[tokio::test]
    async fn missing_relief_for_motion_fails_before_sending() {
        let client = proxy_answering(json!({})).await;
        let mut args = form("Ohio", DocumentType::Motion);
        args.relief_sought = None;
        let err = run(&args, &client).await.unwrap_err();
        assert_eq!(err.to_string(), "relief sought is required");
    }
}
