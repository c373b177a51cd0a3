/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The lexical layer: a byte-oriented, read-only view over
//! an input buffer that tracks line, column and indentation
//! as it advances.
//!
//! Everything here is deliberately dumb: the [`Cursor`]
//! knows nothing about frames, keys, or collections. It
//! only ever answers "what byte is here" and "how far into
//! this line are we".

use crate::error::internal::ErrorKind;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A cursor over a borrowed byte buffer.
///
/// `'de` follows the borrow of the original input for the
/// lifetime of a parse, matching every other zero-copy
/// borrow in this crate.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'de>
{
    buffer: &'de [u8],

    /// Byte offset of the next unread byte
    pos: usize,

    /// Zero-based line number of the cursor's current
    /// position
    line: usize,

    /// Byte offset of the start of the current line
    line_start: usize,

    /// Count of leading space bytes already consumed on the
    /// current line
    indent: usize,

    /// True as long as nothing but leading whitespace has
    /// been consumed on the current line
    fresh_line: bool,
}

impl<'de> Cursor<'de>
{
    /// Build a cursor over `buffer`, skipping a leading
    /// UTF-8 BOM if present.
    pub fn new(buffer: &'de [u8]) -> Self
    {
        let pos = if buffer.starts_with(&UTF8_BOM)
        {
            UTF8_BOM.len()
        }
        else
        {
            0
        };

        Self {
            buffer,
            pos,
            line: 0,
            line_start: pos,
            indent: 0,
            fresh_line: true,
        }
    }

    pub fn is_eof(&self) -> bool
    {
        self.pos >= self.buffer.len()
    }

    pub fn peek(&self) -> Option<u8>
    {
        self.buffer.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8>
    {
        self.buffer.get(self.pos + offset).copied()
    }

    /// Bytes from the cursor's current position to the end
    /// of the buffer.
    pub fn rest(&self) -> &'de [u8]
    {
        &self.buffer[self.pos..]
    }

    pub fn byte_offset(&self) -> usize
    {
        self.pos
    }

    pub fn line(&self) -> usize
    {
        self.line
    }

    /// Current column, measured from the start of the line
    /// in bytes.
    pub fn column(&self) -> usize
    {
        self.pos - self.line_start
    }

    /// Indentation (leading space count) recorded for the
    /// current line by [`read_line_indentation`](Self::read_line_indentation).
    pub fn indentation(&self) -> usize
    {
        self.indent
    }

    pub fn is_fresh_line(&self) -> bool
    {
        self.fresh_line
    }

    /// Advance past one byte, updating line/column
    /// bookkeeping if it was a line break.
    pub fn bump(&mut self)
    {
        match self.peek()
        {
            Some(b'\r') =>
            {
                self.pos += 1;

                if self.peek() == Some(b'\n')
                {
                    self.pos += 1;
                }

                self.register_newline();
            },
            Some(b'\n') =>
            {
                self.pos += 1;

                self.register_newline();
            },
            Some(_) =>
            {
                self.pos += 1;
                self.fresh_line = false;
            },
            None =>
            {},
        }
    }

    /// Advance `n` non-newline bytes. Callers must only use
    /// this over a span already known to contain no line
    /// breaks.
    pub fn bump_n(&mut self, n: usize)
    {
        self.pos += n;
        self.fresh_line = false;
    }

    fn register_newline(&mut self)
    {
        self.line += 1;
        self.line_start = self.pos;
        self.indent = 0;
        self.fresh_line = true;
    }

    /// Consume leading spaces on a fresh line, recording
    /// their count as this line's indentation.
    ///
    /// ## Errors
    ///
    /// Returns [`ErrorKind::ForbiddenTabIndentation`] the
    /// moment a tab byte is seen in the indentation region.
    pub fn read_line_indentation(&mut self) -> Result<usize, ErrorKind>
    {
        loop
        {
            match self.peek()
            {
                Some(b' ') =>
                {
                    self.pos += 1;
                    self.indent += 1;
                },
                Some(b'\t') => return Err(ErrorKind::ForbiddenTabIndentation),
                _ => break,
            }
        }

        self.fresh_line = false;

        Ok(self.indent)
    }

    /// Consume inline horizontal whitespace (space and tab,
    /// tabs are legal outside the indentation region).
    pub fn skip_blanks(&mut self)
    {
        while matches!(self.peek(), Some(b' ') | Some(b'\t'))
        {
            self.pos += 1;
        }
    }

    pub fn is_blank(byte: u8) -> bool
    {
        matches!(byte, b' ' | b'\t')
    }

    pub fn is_break(byte: u8) -> bool
    {
        matches!(byte, b'\n' | b'\r')
    }

    /// True if the cursor sits at end-of-input, a line
    /// break, or a `#` that starts a comment (i.e nothing
    /// more of substance remains on this line).
    pub fn at_line_end_or_comment(&self) -> bool
    {
        match self.peek()
        {
            None => true,
            Some(b) => Self::is_break(b) || b == b'#',
        }
    }

    /// Consume from the current `#` through (but not
    /// including) the next line break, returning the
    /// comment body with a single leading space stripped if
    /// present.
    pub fn read_comment(&mut self) -> &'de [u8]
    {
        debug_assert_eq!(self.peek(), Some(b'#'));

        self.pos += 1;
        self.fresh_line = false;

        if self.peek() == Some(b' ')
        {
            self.pos += 1;
        }

        let start = self.pos;

        while let Some(b) = self.peek()
        {
            if Self::is_break(b)
            {
                break;
            }

            self.pos += 1;
        }

        &self.buffer[start..self.pos]
    }

    /// Borrow `[start, end)` of the underlying buffer.
    ///
    /// `start`/`end` are absolute byte offsets, as returned
    /// by [`byte_offset`](Self::byte_offset).
    pub fn slice(&self, start: usize, end: usize) -> &'de [u8]
    {
        &self.buffer[start..end]
    }
}
