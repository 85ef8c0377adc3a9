//! Show command - display one document

use crate::chat::ChatAdapter;
use crate::cli::commands::language;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::content::DocumentRef;
use crate::core::error::KbError;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document reference as category:item
    pub doc_ref: String,

    /// Display language
    #[arg(long, short = 'l')]
    pub lang: Option<String>,
}

/// Show response
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub doc_ref: String,
    pub lang: String,
    pub text: String,
    pub media_path: Option<String>,
}

/// Execute the show command
pub async fn execute(
    args: ShowArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc_ref = DocumentRef::parse(&args.doc_ref)?;
    if services.index.snapshot().store.get_ref(&doc_ref).is_none() {
        return Err(KbError::DocumentNotFound(doc_ref.to_string()).into());
    }

    let lang = language(args.lang.as_deref(), services);
    let resolved = services.resolver.resolve_ref(&doc_ref, &lang);

    match format {
        OutputFormat::Human => {
            println!("{}\n", colors::doc_ref(doc_ref.as_str()));
            println!("{}", resolved.text);
            if let Some(path) = &resolved.media_path {
                println!(
                    "\n{} {}",
                    colors::label("Media:"),
                    colors::file_path(&path.display().to_string())
                );
            }
        }
        OutputFormat::Json => {
            let out = ShowOutput {
                doc_ref: doc_ref.to_string(),
                lang,
                text: resolved.text,
                media_path: resolved
                    .media_path
                    .map(|p| p.to_string_lossy().into_owned()),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Chat => {
            let reply = ChatAdapter::new(Arc::clone(services)).document(&doc_ref, &lang);
            output::print_chat_reply(&reply);
        }
    }

    Ok(())
}
