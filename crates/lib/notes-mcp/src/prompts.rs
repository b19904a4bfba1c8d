//! The `summarize_notes` prompt.

use notes_core::sink::DatabaseSink;
use notes_store::schema::{PROMPT_SUMMARIZE_NOTES, make_note_uri};
use rmcp::ErrorData;
use rmcp::model::{
    AnnotateAble,
    Content,
    ErrorCode,
    GetPromptResult,
    Prompt,
    PromptArgument,
    PromptMessage,
    PromptMessageContent,
    PromptMessageRole,
    RawContent,
};

use crate::resources::text_contents;
use crate::{NotesMcp, helpers};

const SUMMARIZE_DESCRIPTION: &str = "Summarize all notes";
const SUMMARIZE_LEAD: &str = "Please summarize the following notes:";
const SUMMARIZE_CLOSING: &str = "Provide a concise summary of all the notes above.";

pub fn prompt_descriptors() -> Vec<Prompt> {
    vec![Prompt::new(
        PROMPT_SUMMARIZE_NOTES,
        Some(SUMMARIZE_DESCRIPTION),
        None::<Vec<PromptArgument>>,
    )]
}

impl<S: DatabaseSink> NotesMcp<S> {
    pub(crate) async fn render_prompt(&self, name: &str) -> Result<GetPromptResult, ErrorData> {
        if name != PROMPT_SUMMARIZE_NOTES {
            return Err(helpers::mcp_err(
                ErrorCode::RESOURCE_NOT_FOUND,
                format!("Unknown prompt: {name}"),
            ));
        }

        let notes = self.control.list_notes().await;
        let mut messages = Vec::with_capacity(notes.len() + 2);
        messages.push(PromptMessage::new_text(PromptMessageRole::User, SUMMARIZE_LEAD));
        for entry in notes {
            messages.push(embedded_note(&make_note_uri(&entry.id), &entry.note.content)?);
        }
        messages.push(PromptMessage::new_text(PromptMessageRole::User, SUMMARIZE_CLOSING));

        Ok(GetPromptResult {
            description: Some(SUMMARIZE_DESCRIPTION.to_string()),
            messages,
        })
    }
}

/// Builds a user message embedding a note as a `text/plain` resource.
fn embedded_note(uri: &str, text: &str) -> Result<PromptMessage, ErrorData> {
    let contents = text_contents(text.to_string(), uri);
    let RawContent::Resource(embedded) = Content::resource(contents).raw else {
        return Err(helpers::mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("failed to embed note {uri}"),
        ));
    };
    Ok(PromptMessage {
        role: PromptMessageRole::User,
        content: PromptMessageContent::Resource {
            resource: embedded.no_annotation(),
        },
    })
}
