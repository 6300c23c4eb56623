//! The banner store.
//!
//! Every write runs in its own transaction, so a banner row and its `banner_tags` rows are
//! never observed out of step: after a successful write the stored tag set is exactly the set
//! that was passed in, and a failed write leaves nothing behind.
//!
//! Reads are not held to the same standard. [`list`] fetches the matching banners and then
//! each banner's tags in separate statements, outside any shared snapshot, so a write that
//! commits between the two may be reflected in the tags but not the row (or the other way
//! around). Callers that need an exact picture must re-read.

mod list;
mod user;
mod write;

#[cfg(test)]
mod test;

pub use list::{list, ListFilter};
pub use user::user_banner;
pub use write::{create, delete, update};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The banner does not exist, or (for user lookups) nothing eligible matched.
	#[error("banner not found")]
	NotFound,
	#[error("SQL error: {0}")]
	Sqlx(#[from] sqlx::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
