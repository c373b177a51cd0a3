/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A streaming reader for block-style YAML.
//!
//! This crate is deliberately narrow: no flow collections
//! (`{...}`, `[...]`), no anchors/aliases, no explicit tags,
//! no multi-document streams beyond recognising `---`/`...`
//! markers, and no quoted-scalar escape decoding. What it
//! does implement -- indentation-driven mappings, sequences,
//! plain and block scalars -- is a single forward pass with a
//! bounded stack and zero-copy byte slices throughout.
//!
//! Two ways to consume a document:
//!
//! - [`event`]: a SAX-style [`event::Handler`] sees every
//!   production as it is recognised. No allocation beyond the
//!   frame stack.
//! - [`dom`]: [`dom::read_document`] materialises a node tree
//!   for callers who would rather walk a document than
//!   implement a handler.
//!
//! ```
//! use yarrow::dom;
//!
//! let doc = dom::read_document(b"name: crate\nkind: library\n");
//! let root = doc.root().as_object().unwrap();
//!
//! assert_eq!(root.get(b"name").unwrap().as_scalar().unwrap().text(), "crate");
//! ```

#![allow(clippy::suspicious_else_formatting)]

pub mod dom;
pub mod event;

mod cursor;
mod error;
mod options;

pub use error::{Category, Error, Result, ResultCode};
pub use options::Options;
