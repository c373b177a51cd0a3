/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Small, `Copy` value types shared between the event
//! stream and the DOM layer.

/// How a scalar's line fragments should be rejoined into a
/// single string.
///
/// `Plain` corresponds to this system's "none" style: a
/// scalar with no block indicator, reassembled by folding
/// newlines to spaces. `DoubleQuoted`/`SingleQuoted` are
/// never produced by the event parser in this crate (quoted
/// scalars are out of scope for the streaming grammar) but
/// are kept here as DOM-only targets so a [`Node`](crate::dom::Node)
/// built some other way can still ask for their
/// materialisation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStyle
{
    /// No block indicator; newlines fold to spaces, blank
    /// lines become hard breaks
    Plain,
    /// `|` literal block; newlines are preserved verbatim
    Literal,
    /// `>` folded block; like `Literal` but non-blank runs
    /// fold to spaces
    Folded,
    /// `'...'`; DOM-only, never produced by this parser
    SingleQuoted,
    /// `"..."`; DOM-only, never produced by this parser
    DoubleQuoted,
}

impl BlockStyle
{
    pub const fn is_block(self) -> bool
    {
        matches!(self, Self::Literal | Self::Folded)
    }
}

/// Trailing-newline policy applied to block scalars.
///
/// Ignored entirely for [`BlockStyle::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chomping
{
    /// Collapse all trailing empty lines to a single line
    /// break. The default when no indicator is given.
    Clip,
    /// `-`; drop all trailing empty lines
    Strip,
    /// `+`; keep every trailing empty line
    Keep,
}

impl Default for Chomping
{
    fn default() -> Self
    {
        Self::Clip
    }
}
