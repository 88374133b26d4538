use std::collections::HashMap;

use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result as LspResult};
use tower_lsp::lsp_types::*;

use crate::hover::{describe, mcode_at};
use crate::lsp::backend::Backend;
use crate::lsp::position::{byte_to_utf16, full_range, lsp_lines, utf16_to_byte};
use crate::renumber::renumber_text;

/// Command id of "renumber active document"
pub const RENUMBER_COMMAND: &str = "tnc7.renumber";

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling formatting requests
#[tower_lsp::async_trait]
pub trait HandleFormatting {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>>;
}

/// Trait for handling workspace commands
#[tower_lsp::async_trait]
pub trait HandleExecuteCommand {
    async fn handle_execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> LspResult<Option<Value>>;
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;
        let pos = tdpp.position;

        let content = match self.target_text(&tdpp.text_document.uri).await {
            Some(content) => content,
            None => return Ok(None),
        };

        let lines = lsp_lines(&content);
        let line = lines.get(pos.line as usize).copied().unwrap_or("");
        let offset = utf16_to_byte(line, pos.character);
        let word = match mcode_at(line, offset) {
            Some(word) => word,
            None => return Ok(None),
        };

        let m = MarkupContent {
            kind: MarkupKind::Markdown,
            value: describe(self.docs, word.code),
        };
        let range = Range::new(
            Position::new(pos.line, byte_to_utf16(line, word.start)),
            Position::new(pos.line, byte_to_utf16(line, word.end)),
        );

        Ok(Some(Hover {
            contents: HoverContents::Markup(m),
            range: Some(range),
        }))
    }
}

#[tower_lsp::async_trait]
impl HandleFormatting for Backend {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>> {
        Ok(self
            .target_text(&params.text_document.uri)
            .await
            .map(|content| renumber_edits(&content)))
    }
}

#[tower_lsp::async_trait]
impl HandleExecuteCommand for Backend {
    async fn handle_execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> LspResult<Option<Value>> {
        if params.command != RENUMBER_COMMAND {
            return Err(Error::invalid_params(format!(
                "Unknown command '{}'",
                params.command
            )));
        }

        let uri = command_uri(&params.arguments)
            .ok_or_else(|| Error::invalid_params("Expected a document URI argument"))?;

        // Unknown or non-TNC7 documents are left alone
        let content = match self.target_text(&uri).await {
            Some(content) => content,
            None => {
                log::debug!("Ignoring renumber request for {}", uri);
                return Ok(None);
            }
        };

        let edit = WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), renumber_edits(&content))])),
            ..Default::default()
        };

        match self.client.apply_edit(edit).await {
            Ok(response) if response.applied => log::info!("Renumbered {}", uri),
            Ok(response) => log::warn!(
                "Client rejected renumbering of {}: {}",
                uri,
                response.failure_reason.unwrap_or_default()
            ),
            Err(e) => log::warn!("Failed to apply renumbering of {}: {}", uri, e),
        }

        Ok(None)
    }
}

/// A single edit replacing the whole document with its renumbered text
pub fn renumber_edits(content: &str) -> Vec<TextEdit> {
    vec![TextEdit::new(full_range(content), renumber_text(content))]
}

/// Accepts `["file:///…"]` or `[{ "uri": "file:///…" }]`
fn command_uri(arguments: &[Value]) -> Option<Url> {
    let raw = match arguments.first()? {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("uri")?.as_str()?,
        _ => return None,
    };
    Url::parse(raw).ok()
}
