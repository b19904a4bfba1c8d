pub const NOTE_URI_SCHEME: &str = "note";
pub const NOTE_MIME_TYPE: &str = "text/plain";

pub const TOOL_CREATE_NOTE: &str = "create_note";
pub const TOOL_UPDATE_DATABASE: &str = "update_database";

pub const PROMPT_SUMMARIZE_NOTES: &str = "summarize_notes";

pub const SEED_NOTES: [(&str, &str); 2] = [
    ("First Note", "This is note 1"),
    ("Second Note", "This is note 2"),
];

#[must_use]
pub fn make_note_uri(id: &str) -> String {
    format!("{NOTE_URI_SCHEME}:///{id}")
}

#[must_use]
pub fn make_note_description(title: &str) -> String {
    format!("A text note: {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_uri_uses_empty_authority() {
        assert_eq!(make_note_uri("7"), "note:///7");
    }
}
