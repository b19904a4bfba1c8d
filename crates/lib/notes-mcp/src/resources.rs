//! Notes exposed as `note:///{id}` resources.

use notes_core::sink::DatabaseSink;
use notes_store::schema::{NOTE_MIME_TYPE, NOTE_URI_SCHEME, make_note_description, make_note_uri};
use rmcp::ErrorData;
use rmcp::model::{AnnotateAble, ErrorCode, RawResource, ReadResourceResult, Resource, ResourceContents};
use url::Url;

use crate::{NotesMcp, helpers};

impl<S: DatabaseSink> NotesMcp<S> {
    pub(crate) async fn note_resources(&self) -> Vec<Resource> {
        self.control
            .list_notes()
            .await
            .into_iter()
            .map(|entry| {
                let mut resource = RawResource::new(make_note_uri(&entry.id), entry.note.title.clone());
                resource.description = Some(make_note_description(&entry.note.title));
                resource.mime_type = Some(NOTE_MIME_TYPE.to_string());
                resource.no_annotation()
            })
            .collect()
    }

    pub(crate) async fn read_note(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        let id = note_id_from_uri(uri)?;
        let note = self.control.get_note(&id).await.map_err(helpers::map_err)?;
        Ok(ReadResourceResult {
            contents: vec![text_contents(note.content, uri)],
        })
    }
}

pub fn text_contents(text: String, uri: &str) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(NOTE_MIME_TYPE.to_string());
    }
    contents
}

fn note_id_from_uri(uri: &str) -> Result<String, ErrorData> {
    let parsed = Url::parse(uri).map_err(|err| {
        helpers::mcp_err(ErrorCode::INVALID_PARAMS, format!("Invalid resource URI {uri}: {err}"))
    })?;
    if parsed.scheme() != NOTE_URI_SCHEME {
        return Err(helpers::mcp_err(
            ErrorCode::RESOURCE_NOT_FOUND,
            format!("Unknown resource: {uri}"),
        ));
    }
    Ok(parsed.path().trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use notes_core::sink::LoggingSink;
    use notes_core::store::NotesStore;

    use super::*;

    #[tokio::test]
    async fn resources_list_every_note_in_order() {
        let server = NotesMcp::new(NotesStore::with_seed_notes(), LoggingSink);

        let value = serde_json::to_value(server.note_resources().await)
            .expect("resources should serialize");

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["uri"], "note:///1");
        assert_eq!(value[0]["name"], "First Note");
        assert_eq!(value[0]["mimeType"], "text/plain");
        assert_eq!(value[1]["description"], "A text note: Second Note");
    }

    #[tokio::test]
    async fn created_note_round_trips_through_uri() {
        let server = NotesMcp::new(NotesStore::new(), LoggingSink);
        let content = "line one\n  line two with trailing space ";
        let id = server
            .control
            .create_note("Draft", content)
            .await
            .expect("create should succeed");

        let result = server
            .read_note(&make_note_uri(&id))
            .await
            .expect("note should be readable");

        let value = serde_json::to_value(&result).expect("result should serialize");
        assert_eq!(value["contents"][0]["text"], content);
        assert_eq!(value["contents"][0]["mimeType"], "text/plain");
        assert_eq!(value["contents"][0]["uri"], "note:///1");
    }

    #[tokio::test]
    async fn unknown_note_is_resource_not_found() {
        let server = NotesMcp::new(NotesStore::with_seed_notes(), LoggingSink);

        let err = server
            .read_note("note:///42")
            .await
            .expect_err("note 42 should not exist");

        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn uri_validation() {
        assert_eq!(note_id_from_uri("note:///7").ok(), Some("7".to_string()));
        assert_eq!(
            note_id_from_uri("file:///etc/passwd").map_err(|err| err.code),
            Err(ErrorCode::RESOURCE_NOT_FOUND)
        );
        assert_eq!(
            note_id_from_uri("not a uri").map_err(|err| err.code),
            Err(ErrorCode::INVALID_PARAMS)
        );
    }
}
