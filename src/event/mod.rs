/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The streaming (SAX-style) event layer.
//!
//! [`parse`] and [`parse_with`] drive a single block-style
//! YAML document, byte by byte, pushing every production
//! straight into a caller-supplied [`Handler`]. Nothing is
//! buffered beyond the current line; the only allocation in
//! this whole module is the frame stack itself.
//!
//! Only the restricted grammar below is supported -- no flow
//! collections, no anchors/aliases, no explicit tags, no
//! quoted-scalar escape decoding at this layer:
//!
//! ```text
//! document   := (marker-start)? content? (marker-end)?
//! content    := scalar | mapping | sequence
//! mapping    := (key content)+
//! sequence   := (entry content)+
//! scalar     := plain-line+ | block-header block-line*
//! ```
//!
//! [`dom::read_document`](crate::dom::read_document) is
//! built on top of this module for callers who would rather
//! materialise a tree than implement [`Handler`] themselves.

pub(crate) mod parser;

pub mod handler;
pub mod types;

pub use handler::Handler;

use crate::options::Options;

/// Parse `input` with the [default options](Options::new),
/// feeding every production to `handler`.
pub fn parse<'de, H>(input: &'de [u8], handler: &mut H) -> crate::Result<()>
where
    H: Handler<'de>,
{
    parse_with(input, handler, &Options::new())
}

/// Parse `input` under `options`, feeding every production
/// to `handler`.
pub fn parse_with<'de, H>(
    input: &'de [u8],
    handler: &mut H,
    options: &Options,
) -> crate::Result<()>
where
    H: Handler<'de>,
{
    parser::drive(input, handler, options).into_result()
}
