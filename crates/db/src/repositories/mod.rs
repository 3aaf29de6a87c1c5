//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod folder_repo;
pub mod note_repo;
pub mod snippet_repo;
pub mod user_repo;

pub use folder_repo::FolderRepo;
pub use note_repo::NoteRepo;
pub use snippet_repo::SnippetRepo;
pub use user_repo::UserRepo;
