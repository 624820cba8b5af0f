mod display;
mod draft;

use std::net::SocketAddr;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use prosedoc_ai::{DEFAULT_MODEL, GenerationClient};
use prosedoc_core::jurisdiction::{catalog, filter};
use prosedoc_core::motion::find_motion;
use prosedoc_core::{
    Compilation, DocumentGenerationRequest, DocumentType, build_prompt, draft_template,
    motions_for,
};
use prosedoc_proxy::{API_KEY_ENV, DEFAULT_UPSTREAM_URL, ProxyConfig};

#[derive(Parser)]
#[command(
    name = "prosedoc",
    version,
    about = "Draft court documents for self-represented litigants"
)]
struct Cli {
    /// Enable debug logging (overridden by PROSEDOC_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List jurisdictions, optionally filtered by a search term.
    Jurisdictions {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List the motion types available in a jurisdiction.
    Motions { jurisdiction: String },
    /// List the document types that can be drafted.
    DocumentTypes,
    /// Print the drafting prompt without sending it.
    Prompt(FormArgs),
    /// Draft a document through the generation proxy.
    Generate {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        proxy: ProxyArgs,
    },
    /// Fetch preparation tips for a jurisdiction.
    Tips {
        #[arg(long)]
        jurisdiction: String,
        #[arg(long, default_value = "motion")]
        document_type: DocumentType,
        #[command(flatten)]
        proxy: ProxyArgs,
    },
    /// Print the blank caption template for a jurisdiction.
    Template {
        #[arg(long)]
        jurisdiction: String,
        /// Motion type id used as the document title.
        #[arg(long)]
        motion: Option<String>,
    },
    /// Reorder the standard filing and print its table of contents.
    ///
    /// Removals are applied first, then moves in the order given.
    Compile {
        #[arg(long)]
        remove: Vec<String>,
        /// Zero-based position to move up one place.
        #[arg(long)]
        move_up: Vec<usize>,
        /// Zero-based position to move down one place.
        #[arg(long)]
        move_down: Vec<usize>,
    },
    /// Run the generation proxy.
    Serve {
        #[arg(long, env = "PROSEDOC_BIND", default_value = "127.0.0.1:8787")]
        bind: SocketAddr,
        #[arg(long, env = "AI_SERVICE_URL", default_value = DEFAULT_UPSTREAM_URL)]
        upstream_url: String,
        /// Fallback key; AI_SERVICE_API_KEY is re-read on every request.
        #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,
    },
}

/// Wizard selections and editor form fields.
#[derive(Args, Clone)]
struct FormArgs {
    #[arg(long)]
    jurisdiction: String,
    #[arg(long, default_value = "motion")]
    document_type: DocumentType,
    /// Motion type id (see `prosedoc motions`).
    #[arg(long)]
    motion: Option<String>,
    #[arg(long)]
    case_number: Option<String>,
    #[arg(long)]
    plaintiff: Option<String>,
    #[arg(long)]
    defendant: Option<String>,
    #[arg(long)]
    filing_party: Option<String>,
    #[arg(long)]
    case_details: Option<String>,
    #[arg(long)]
    relief_sought: Option<String>,
    #[arg(long)]
    legal_basis: Option<String>,
    #[arg(long)]
    facts: Option<String>,
    #[arg(long)]
    additional_info: Option<String>,
}

impl FormArgs {
    /// Copy the editor form fields onto `request`.
    fn fill(&self, request: &mut DocumentGenerationRequest) {
        request.case_number = self.case_number.clone();
        request.plaintiff_name = self.plaintiff.clone();
        request.defendant_name = self.defendant.clone();
        request.filing_party = self.filing_party.clone();
        request.case_details = self.case_details.clone();
        request.relief_sought = self.relief_sought.clone();
        request.legal_basis = self.legal_basis.clone();
        request.facts = self.facts.clone();
        request.additional_info = self.additional_info.clone();
    }
}

#[derive(Args, Clone)]
struct ProxyArgs {
    /// Base URL of the generation proxy.
    #[arg(long, env = "PROSEDOC_PROXY_URL", default_value = "http://127.0.0.1:8787")]
    proxy_url: String,
    #[arg(long, env = "PROSEDOC_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

impl ProxyArgs {
    fn client(&self) -> GenerationClient {
        GenerationClient::new(self.proxy_url.clone()).with_model(self.model.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    tracing::debug!("prosedoc v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Jurisdictions { query } => {
            print!("{}", display::render_jurisdictions(&filter(catalog(), &query)));
        }
        Command::Motions { jurisdiction } => {
            print!(
                "{}",
                display::render_motions(&jurisdiction, &motions_for(&jurisdiction))
            );
        }
        Command::DocumentTypes => print!("{}", display::render_document_types()),
        Command::Prompt(form) => {
            let mut request = DocumentGenerationRequest::new(
                form.jurisdiction.clone(),
                form.document_type.id(),
            );
            if let Some(id) = &form.motion {
                let motion =
                    find_motion(id).with_context(|| format!("unknown motion type: {id}"))?;
                request.motion_type = Some(motion.title.to_string());
            }
            form.fill(&mut request);
            request.validate()?;
            println!("{}", build_prompt(&request));
        }
        Command::Generate { form, proxy } => {
            let draft = draft::run(&form, &proxy.client()).await?;
            println!("{draft}");
        }
        Command::Tips {
            jurisdiction,
            document_type,
            proxy,
        } => {
            let tips = proxy
                .client()
                .jurisdiction_specific_tips(&jurisdiction, document_type.id())
                .await;
            println!("{jurisdiction} Tips\n\n{tips}");
        }
        Command::Template {
            jurisdiction,
            motion,
        } => {
            let title = match &motion {
                Some(id) => Some(
                    find_motion(id)
                        .with_context(|| format!("unknown motion type: {id}"))?
                        .title,
                ),
                None => None,
            };
            println!("{}", draft_template(&jurisdiction, title));
        }
        Command::Compile {
            remove,
            move_up,
            move_down,
        } => {
            let (compilation, skipped) = arrange_filing(&remove, &move_up, &move_down);
            for edit in &skipped {
                tracing::warn!(edit = %edit, "compile edit had no effect");
            }
            print!("{}", display::render_compilation(&compilation));
        }
        Command::Serve {
            bind,
            upstream_url,
            api_key,
        } => {
            prosedoc_proxy::serve(
                bind,
                ProxyConfig {
                    upstream_url,
                    api_key,
                    api_key_env: Some(API_KEY_ENV.to_string()),
                },
            )
            .await
            .context("running generation proxy")?;
        }
    }
    Ok(())
}

/// Apply `compile` edits to the standard filing: removals first, then moves
/// in the order given. Returns the filing and the edits that changed nothing.
fn arrange_filing(
    remove: &[String],
    move_up: &[usize],
    move_down: &[usize],
) -> (Compilation, Vec<String>) {
    let mut compilation = Compilation::default_filing();
    let mut skipped = Vec::new();
    for id in remove {
        if !compilation.remove(id) {
            skipped.push(format!("--remove {id}"));
        }
    }
    for &index in move_up {
        if !compilation.move_up(index) {
            skipped.push(format!("--move-up {index}"));
        }
    }
    for &index in move_down {
        if !compilation.move_down(index) {
            skipped.push(format!("--move-down {index}"));
        }
    }
    (compilation, skipped)
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROSEDOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrange_filing_reports_edits_that_did_nothing() {
        let (compilation, skipped) = arrange_filing(
            &["3".into(), "9".into()],
            &[0, 1],
            &[3, usize::MAX],
        );
        assert_eq!(
            compilation.table_of_contents(),
            vec![
                "1. Declaration in Support of Motion",
                "2. Motion for Summary Judgment",
                "3. Exhibit B - Correspondence",
                "4. Proposed Order",
            ]
        );
        assert_eq!(
            skipped,
            vec![
                "--remove 9".to_string(),
                "--move-up 0".to_string(),
                "--move-down 3".to_string(),
                format!("--move-down {}", usize::MAX),
            ]
        );
    }
}
