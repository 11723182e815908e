//! arraykit - growable array containers with cursor-based removal
//!
//! # Overview
//!
//! `arraykit` provides a hand-rolled resizable array and the containers built
//! on it:
//!
//! - [`ArrayList`]: insertion-ordered, indexed push/get/remove
//! - [`ArraySet`]: the same storage, refusing duplicate inserts
//! - [`Cursor`]: a traversal that can remove the element it just yielded
//!
//! plus a small operation-script language ([`Session`]) for driving a list or
//! a set, and ariadne-based rendering of script errors.
//!
//! # Quick Start
//!
//! ```
//! use arraykit::{ArrayList, Error};
//!
//! let mut list = ArrayList::new();
//! list.push("Apple");
//! list.push("Banana");
//! list.push("Cherry");
//!
//! assert_eq!(list.remove(1), Ok("Banana"));
//! assert_eq!(list.get(1), Ok(&"Cherry"));
//! assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
//! ```
//!
//! # Removing while traversing
//!
//! ```
//! use arraykit::ArrayList;
//!
//! let mut list: ArrayList<&str> = ["Apple", "Banana", "Cherry", "Date"].into_iter().collect();
//! let mut cursor = list.cursor();
//! while cursor.has_next() {
//!     if *cursor.next().unwrap() == "Banana" {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(list.to_string(), "[Apple, Cherry, Date]");
//! ```
//!
//! # Scripts
//!
//! ```
//! use arraykit::{ContainerKind, Session, StoreOptions};
//!
//! let mut session = Session::new(ContainerKind::Set, StoreOptions::default()).unwrap();
//! let output = session.run("add Apple; add Apple; size").unwrap();
//! assert_eq!(output, vec!["true", "false", "1"]);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from arraykit_core
pub use arraykit_core::{
    ArrayList, ArraySet, ArrayStore, CapacityStats, Cursor, CursorState, DEFAULT_CAPACITY, Error,
    GrowthPolicy, Result, StoreOptions,
};

pub use arraykit_core::script::{
    self, Command, Container, ContainerKind, Op, ScriptError, ScriptErrorKind, Session, Span,
    parse,
};
