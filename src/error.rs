/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{error::Error as StdError, fmt};

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque type representing all possible errors which can
/// occur while reading a YAML byte stream.
pub struct Error
{
    inner: Box<internal::Error>,
}

impl Error
{
    /// The line at which the error occurred.
    pub fn line(&self) -> u64
    {
        self.inner.line
    }

    /// The column into the line where the error occurred.
    pub fn column(&self) -> u64
    {
        self.inner.column
    }

    /// The index into the byte stream at which the error
    /// occurred.
    pub fn at(&self) -> u64
    {
        self.inner.at
    }

    /// The specific [`ResultCode`] this error represents.
    pub fn code(&self) -> ResultCode
    {
        self.inner.kind.into()
    }

    /// Categorize the error into one of the following:
    ///
    /// - [`Category::Syntax`] the byte stream was not
    ///   structured as valid block-style YAML
    /// - [`Category::Limit`] a configured resource limit
    ///   (e.g. [`Options::max_depth`](crate::Options::max_depth))
    ///   was exceeded
    pub fn classify(&self) -> Category
    {
        self.inner.classify()
    }

    /// Checks whether this error was contextualized.
    ///
    /// If this method returns false then [`line()`](#method.line),
    /// [`column()`](#method.column) and [`at()`](#method.at)
    /// will return meaningless values.
    pub fn has_context(&self) -> bool
    {
        self.inner.has_context()
    }

    pub(crate) fn new(err: internal::Error) -> Self
    {
        Self {
            inner: Box::new(err),
        }
    }
}

/// Rough category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The byte stream was not syntactically valid
    /// block-style YAML
    Syntax,

    /// A configured resource limit was exceeded
    Limit,
}

/// Every outcome a parse attempt can report, success
/// included.
///
/// This mirrors the parser's internal state machine
/// one-to-one: every failing variant corresponds to exactly
/// one place in the driver loop that can abort it, and
/// [`Success`](ResultCode::Success) is the only variant
/// that is not also a member of [`ErrorKind`](internal::ErrorKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResultCode
{
    /// Parsing completed without error
    Success,

    /// The frame stack grew past the configured
    /// [`Options::max_depth`](crate::Options::max_depth)
    ReachedStackMaxDepth,

    /// Reserved for forward compatibility. Never emitted by
    /// this crate.
    NotImplemented,

    /// A tab byte was found while reading the indentation
    /// of a fresh line
    ForbiddenTabIndentation,

    /// After a dedent popped at least one frame, the newly
    /// exposed frame's indent did not match the current
    /// line's indentation
    BadIndentation,

    /// A scalar block header (`|`, `>`) was followed by
    /// something other than whitespace, a comment, or a
    /// line break
    ExpectedLineBreak,

    /// Content inside an open mapping was not followed by a
    /// `:` mapping indicator
    ExpectedKey,

    /// A `:` mapping indicator was found where a key was
    /// not legal
    UnexpectedKey,

    /// Non-whitespace, non-comment content remained after
    /// the frame stack was fully drained
    UnexpectedToken,
}

impl fmt::Display for ResultCode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        use ResultCode::*;

        match self
        {
            Success => f.write_str("success"),
            ReachedStackMaxDepth => f.write_str("reached configured maximum stack depth"),
            NotImplemented => f.write_str("not implemented"),
            ForbiddenTabIndentation => f.write_str("tab character found in indentation"),
            BadIndentation => f.write_str("indentation did not match an enclosing block"),
            ExpectedLineBreak => f.write_str("expected a line break or comment"),
            ExpectedKey => f.write_str("expected a mapping key"),
            UnexpectedKey => f.write_str("mapping key not allowed in this context"),
            UnexpectedToken => f.write_str("unexpected trailing content"),
        }
    }
}

pub(crate) mod internal
{
    use std::{error::Error as StdError, fmt};

    use super::{Category, ResultCode};

    /// Internal error representation, carrying enough
    /// position metadata to contextualize an error after
    /// the fact.
    pub(crate) struct Error
    {
        pub kind:   ErrorKind,
        pub at:     u64,
        pub line:   u64,
        pub column: u64,
    }

    impl Error
    {
        pub fn new(kind: ErrorKind) -> Self
        {
            Self::with_context(kind, 0, 0, 0)
        }

        pub fn with_context(kind: ErrorKind, at: u64, line: u64, column: u64) -> Self
        {
            Self {
                kind,
                at,
                line,
                column,
            }
        }

        pub fn has_context(&self) -> bool
        {
            // Only errors created without context will have a line
            // number of 0
            self.line != 0
        }

        pub fn classify(&self) -> Category
        {
            self.kind.into()
        }
    }

    /// The closed set of failing [`ResultCode`]s.
    ///
    /// Kept separate from [`ResultCode`] so that the public
    /// enum can carry `Success` without this type needing a
    /// variant with no error to describe.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum ErrorKind
    {
        ReachedStackMaxDepth,
        ForbiddenTabIndentation,
        BadIndentation,
        ExpectedLineBreak,
        ExpectedKey,
        UnexpectedKey,
        UnexpectedToken,
    }

    impl From<ErrorKind> for ResultCode
    {
        fn from(kind: ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::ReachedStackMaxDepth => ResultCode::ReachedStackMaxDepth,
                ErrorKind::ForbiddenTabIndentation => ResultCode::ForbiddenTabIndentation,
                ErrorKind::BadIndentation => ResultCode::BadIndentation,
                ErrorKind::ExpectedLineBreak => ResultCode::ExpectedLineBreak,
                ErrorKind::ExpectedKey => ResultCode::ExpectedKey,
                ErrorKind::UnexpectedKey => ResultCode::UnexpectedKey,
                ErrorKind::UnexpectedToken => ResultCode::UnexpectedToken,
            }
        }
    }

    impl From<ErrorKind> for Category
    {
        fn from(kind: ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::ReachedStackMaxDepth => Category::Limit,
                _ => Category::Syntax,
            }
        }
    }

    impl fmt::Display for ErrorKind
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            fmt::Display::fmt(&ResultCode::from(*self), f)
        }
    }

    impl StdError for ErrorKind {}

    impl fmt::Debug for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            let mut this = f.debug_struct("Error");

            this.field("kind", &self.kind);

            if self.has_context()
            {
                this.field("line", &self.line)
                    .field("column", &self.column)
                    .field("index", &self.at);
            }

            this.finish()
        }
    }

    impl fmt::Display for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            if self.has_context()
            {
                f.write_fmt(format_args!(
                    "{}, on line {}, column {}, at index {}",
                    self.kind, self.line, self.column, self.at
                ))
            }
            else
            {
                fmt::Display::fmt(&self.kind, f)
            }
        }
    }

    impl StdError for Error {}

    impl From<Error> for super::Error
    {
        fn from(err: Error) -> Self
        {
            Self::new(err)
        }
    }
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        None
    }
}
