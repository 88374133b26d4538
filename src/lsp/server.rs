use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::Config;
use crate::docs::DocRegistry;
use crate::lsp::backend::Backend;

/// Start the LSP server on stdio
pub async fn serve(config: Config) -> Result<()> {
    // Build the documentation tables before the first request needs them
    let docs = DocRegistry::builtin();
    log::info!(
        "Starting tnc7-ls for language id '{}' ({} M-codes)",
        config.language_id,
        docs.len()
    );

    let (service, socket) = LspService::build(move |client| Backend::new(client, config)).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    log::info!("tnc7-ls stopped");
    Ok(())
}
