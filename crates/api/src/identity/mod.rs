//! Identity resolution.
//!
//! - [`token`] -- validation (and dev minting) of provider-signed HS256 tokens.
//! - [`current_user::CurrentUser`] -- extractor resolving the Bearer token to
//!   a lazily-provisioned `users` row.

pub mod current_user;
pub mod token;

pub use current_user::CurrentUser;
