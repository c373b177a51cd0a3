/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::types::{BlockStyle, Chomping};

/// Sink for the event stream produced by [`parse`](super::parse).
///
/// Every method has a no-op default, so an implementor only
/// overrides the handful of hooks it actually needs -- the
/// capability-detection this crate's source material does
/// at runtime is, in Rust, just a blanket default body.
///
/// `'de` ties borrowed byte slices (`string`, `key`,
/// `comment`) to the lifetime of the input buffer; no
/// allocation or UTF-8 validation happens on this path.
pub trait Handler<'de>
{
    /// A `null` scalar was produced, either from an empty
    /// value position or a recognised null-like token.
    fn null(&mut self) {}

    /// A scalar is starting; `style`/`chomping` describe how
    /// its `string` fragments should be rejoined.
    fn start_scalar(&mut self, style: BlockStyle, chomping: Chomping)
    {
        let _ = (style, chomping);
    }

    /// The scalar most recently started has ended.
    fn end_scalar(&mut self) {}

    /// A mapping is starting.
    fn start_object(&mut self) {}

    /// The mapping most recently started has ended.
    fn end_object(&mut self) {}

    /// A sequence is starting.
    fn start_array(&mut self) {}

    /// The sequence most recently started has ended.
    fn end_array(&mut self) {}

    /// One line fragment of the scalar currently open.
    fn string(&mut self, bytes: &'de [u8])
    {
        let _ = bytes;
    }

    /// A mapping key, emitted immediately before the event
    /// stream for its value.
    fn key(&mut self, bytes: &'de [u8])
    {
        let _ = bytes;
    }

    /// A `#` comment body, with its leading `#` and at most
    /// one separating space already stripped.
    fn comment(&mut self, bytes: &'de [u8])
    {
        let _ = bytes;
    }
}
