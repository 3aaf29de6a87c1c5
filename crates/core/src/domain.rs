//! Domain vocabulary for folders, notes, and snippets.
//!
//! Provides the kind constants and enums used to partition folders and the
//! items placed in them, the advisory folder color palette, and input
//! validators for folder names and the JSON payloads carried by list notes
//! and snippet tabs.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Folder domain constants
// ---------------------------------------------------------------------------

/// Folders that hold code snippets.
pub const DOMAIN_SNIPPETS: &str = "snippets";
/// Folders that hold notes.
pub const DOMAIN_NOTES: &str = "notes";

/// All valid folder domains.
pub const VALID_DOMAINS: &[&str] = &[DOMAIN_SNIPPETS, DOMAIN_NOTES];

// ---------------------------------------------------------------------------
// Note kind constants
// ---------------------------------------------------------------------------

/// Plain or rich text note.
pub const NOTE_KIND_TEXT: &str = "text";
/// Checklist note backed by a `list_items` payload.
pub const NOTE_KIND_LIST: &str = "list";
/// Image note backed by an `image_url`.
pub const NOTE_KIND_IMAGE: &str = "image";

/// All valid note kinds.
pub const VALID_NOTE_KINDS: &[&str] = &[NOTE_KIND_TEXT, NOTE_KIND_LIST, NOTE_KIND_IMAGE];

// ---------------------------------------------------------------------------
// Snippet kind constants
// ---------------------------------------------------------------------------

/// Code snippet, optionally split into named tabs.
pub const SNIPPET_KIND_SNIPPET: &str = "snippet";
/// Markdown document.
pub const SNIPPET_KIND_MARKDOWN: &str = "markdown";

/// All valid snippet kinds.
pub const VALID_SNIPPET_KINDS: &[&str] = &[SNIPPET_KIND_SNIPPET, SNIPPET_KIND_MARKDOWN];

// ---------------------------------------------------------------------------
// Limits and palette
// ---------------------------------------------------------------------------

/// Maximum length for a folder name, matching the dashboard input limit.
pub const MAX_FOLDER_NAME_LENGTH: usize = 50;

/// Folder color palette offered by the dashboard picker. Advisory only:
/// any color string is accepted and stored as given.
pub const FOLDER_PALETTE: &[&str] = &[
    "#f28b82", "#fbbc04", "#fff475", "#ccff90", "#a7ffeb", "#cbf0f8", "#aecbfa", "#d7aefb",
    "#fdcfe8", "#e6c9a8",
];

/// Color applied when a folder is created without one.
pub const DEFAULT_FOLDER_COLOR: &str = "#aecbfa";

/// Color applied when a note is created without one.
pub const DEFAULT_NOTE_COLOR: &str = "#ffffff";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Folder domain enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDomain {
    Snippets,
    Notes,
}

impl ItemDomain {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snippets => DOMAIN_SNIPPETS,
            Self::Notes => DOMAIN_NOTES,
        }
    }

    /// Parse from a string, returning an error for unknown domains.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            DOMAIN_SNIPPETS => Ok(Self::Snippets),
            DOMAIN_NOTES => Ok(Self::Notes),
            other => Err(CoreError::Validation(format!(
                "Unknown domain: '{other}'. Valid domains: {}",
                VALID_DOMAINS.join(", ")
            ))),
        }
    }
}

/// Note kind enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Text,
    List,
    Image,
}

impl NoteKind {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => NOTE_KIND_TEXT,
            Self::List => NOTE_KIND_LIST,
            Self::Image => NOTE_KIND_IMAGE,
        }
    }

    /// Parse from a string, returning an error for unknown kinds.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            NOTE_KIND_TEXT => Ok(Self::Text),
            NOTE_KIND_LIST => Ok(Self::List),
            NOTE_KIND_IMAGE => Ok(Self::Image),
            other => Err(CoreError::Validation(format!(
                "Unknown note kind: '{other}'. Valid kinds: {}",
                VALID_NOTE_KINDS.join(", ")
            ))),
        }
    }
}

/// Snippet kind enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Snippet,
    Markdown,
}

impl SnippetKind {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snippet => SNIPPET_KIND_SNIPPET,
            Self::Markdown => SNIPPET_KIND_MARKDOWN,
        }
    }

    /// Parse from a string, returning an error for unknown kinds.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            SNIPPET_KIND_SNIPPET => Ok(Self::Snippet),
            SNIPPET_KIND_MARKDOWN => Ok(Self::Markdown),
            other => Err(CoreError::Validation(format!(
                "Unknown snippet kind: '{other}'. Valid kinds: {}",
                VALID_SNIPPET_KINDS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a folder name: non-empty, no leading or trailing whitespace,
/// and within [`MAX_FOLDER_NAME_LENGTH`] characters.
pub fn validate_folder_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Folder name must not be empty".to_string(),
        ));
    }
    if trimmed.len() != name.len() {
        return Err(CoreError::Validation(
            "Folder name must not have leading or trailing whitespace".to_string(),
        ));
    }
    let length = name.chars().count();
    if length > MAX_FOLDER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Folder name must not exceed {MAX_FOLDER_NAME_LENGTH} characters, got {length}"
        )));
    }
    Ok(())
}

/// Whether a color is one of the palette values offered by the picker.
pub fn is_palette_color(color: &str) -> bool {
    FOLDER_PALETTE.contains(&color)
}

/// Validate the `list_items` payload of a checklist note: a JSON array of
/// objects, each carrying a string `id`, a string `text`, and a boolean
/// `completed`. Extra keys are permitted.
pub fn validate_list_items(value: &serde_json::Value) -> Result<(), CoreError> {
    let Some(entries) = value.as_array() else {
        return Err(CoreError::Validation(
            "List items must be a JSON array".to_string(),
        ));
    };
    for (index, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            return Err(CoreError::Validation(format!(
                "List item {index} must be a JSON object"
            )));
        };
        if !obj.get("id").is_some_and(|v| v.is_string()) {
            return Err(CoreError::Validation(format!(
                "List item {index} is missing a string 'id'"
            )));
        }
        if !obj.get("text").is_some_and(|v| v.is_string()) {
            return Err(CoreError::Validation(format!(
                "List item {index} is missing a string 'text'"
            )));
        }
        if !obj.get("completed").is_some_and(|v| v.is_boolean()) {
            return Err(CoreError::Validation(format!(
                "List item {index} is missing a boolean 'completed'"
            )));
        }
    }
    Ok(())
}

/// Validate the `tabs` payload of a snippet: a JSON array of objects, each
/// carrying string `id`, `title`, `language`, and `code` fields. Extra keys
/// are permitted.
pub fn validate_tabs(value: &serde_json::Value) -> Result<(), CoreError> {
    let Some(entries) = value.as_array() else {
        return Err(CoreError::Validation(
            "Tabs must be a JSON array".to_string(),
        ));
    };
    for (index, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            return Err(CoreError::Validation(format!(
                "Tab {index} must be a JSON object"
            )));
        };
        for field in ["id", "title", "language", "code"] {
            if !obj.get(field).is_some_and(|v| v.is_string()) {
                return Err(CoreError::Validation(format!(
                    "Tab {index} is missing a string '{field}'"
                )));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
