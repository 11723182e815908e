//! Array-backed containers with explicit growth and cursor-based removal.
//!
//! - [`ArrayStore`]: the growable slot buffer everything sits on.
//! - [`ArrayList`]: ordered container with indexed push/get/remove.
//! - [`Cursor`]: traversal that can remove the element it last yielded.
//! - [`ArraySet`]: an `ArrayList` that ignores duplicate inserts.
//! - [`script`]: a small command language for driving a list or a set.
//!
//! # Thread safety
//!
//! Nothing in this crate locks. Containers are `Send`/`Sync` whenever their
//! elements are; sharing one across threads for mutation needs external
//! synchronization.

#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod list;
pub mod options;
pub mod script;
pub mod set;
pub mod stats;
pub mod store;

pub use cursor::{Cursor, CursorState};
pub use error::{Error, Result};
pub use list::ArrayList;
pub use options::{DEFAULT_CAPACITY, GrowthPolicy, StoreOptions};
pub use set::ArraySet;
pub use stats::CapacityStats;
pub use store::{ArrayStore, IntoIter, Iter};

static_assertions::assert_impl_all!(ArrayList<String>: Send, Sync);
static_assertions::assert_impl_all!(ArraySet<String>: Send, Sync);
