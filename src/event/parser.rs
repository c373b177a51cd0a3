/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The indentation-driven pushdown automaton at the heart
//! of this crate.
//!
//! The driver loop in [`drive`] makes exactly one
//! structural decision per physical line -- dedent how many
//! frames, then dispatch to whichever state the newly
//! exposed top frame is in -- and never looks back past the
//! current line. Continuations (a multi-line plain scalar,
//! a literal block body) are handled by re-entering the
//! same frame's state function on each subsequent line
//! rather than by any form of backtracking.

use super::{
    handler::Handler,
    types::{BlockStyle, Chomping},
};
use crate::{cursor::Cursor, error::internal::ErrorKind, options::Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind
{
    Unknown,
    Scalar,
    ScalarBlock,
    Object,
    Sequence,
    /// Terminal: the root scalar was closed early by an
    /// inline comment (see [`step_read_scalar`]). Any
    /// further non-blank content is a
    /// [`ErrorKind::UnexpectedToken`].
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameState
{
    FindValue,
    ReadScalar,
    ReadScalarBlock,
    ReadKey,
    ReadEntry,
    Closed,
}

#[derive(Debug, Clone)]
struct Frame
{
    state: FrameState,
    kind:  FrameKind,

    /// For `Object`/`Sequence`, and for `ScalarBlock` once
    /// its anchor line has been seen, this is a real column
    /// in the source. Otherwise it is a synthetic
    /// `parent.indent + 1` lower bound used only to satisfy
    /// "child deeper than parent" in the dedent arbiter.
    indent: usize,

    /// `ScalarBlock` only: 0 until the anchor line has been
    /// read.
    processed_lines: usize,

    block_style: BlockStyle,
    chomping:    Chomping,
}

impl Frame
{
    fn unknown(indent: usize) -> Self
    {
        Self {
            state: FrameState::FindValue,
            kind: FrameKind::Unknown,
            indent,
            processed_lines: 0,
            block_style: BlockStyle::Plain,
            chomping: Chomping::Clip,
        }
    }

    fn root() -> Self
    {
        Self::unknown(0)
    }
}

/// Byte-level result of a single parse attempt.
///
/// Carries success alongside failure (matching this
/// system's own "report, don't throw" driver loop) with a
/// fallible [`into_result`](Self::into_result) for callers
/// that would rather work with [`crate::Result`].
#[derive(Debug)]
pub struct Outcome<'de>
{
    fail:         Option<ErrorKind>,
    remaining:    &'de [u8],
    current_line: usize,
    at:           usize,
    column:       usize,
}

impl<'de> Outcome<'de>
{
    /// The [`ResultCode`](crate::ResultCode) this parse
    /// ended with.
    pub fn result(&self) -> crate::ResultCode
    {
        match self.fail
        {
            None => crate::ResultCode::Success,
            Some(kind) => kind.into(),
        }
    }

    pub fn is_success(&self) -> bool
    {
        self.fail.is_none()
    }

    /// Bytes left unconsumed. Empty on a clean success.
    pub fn remaining(&self) -> &'de [u8]
    {
        self.remaining
    }

    /// Zero-based line at which parsing stopped.
    pub fn current_line(&self) -> usize
    {
        self.current_line
    }

    /// Convert into [`crate::Result`], constructing a
    /// contextualized [`crate::Error`] on failure.
    pub fn into_result(self) -> crate::Result<()>
    {
        match self.fail
        {
            None => Ok(()),
            Some(kind) => Err(crate::error::internal::Error::with_context(
                kind,
                self.at as u64,
                self.current_line as u64,
                self.column as u64,
            )
            .into()),
        }
    }
}

/// Run the parser over `input`, feeding every production to
/// `handler`, bounded by `options`.
pub(crate) fn drive<'de, H>(input: &'de [u8], handler: &mut H, options: &Options) -> Outcome<'de>
where
    H: Handler<'de>,
{
    let mut cur = Cursor::new(input);
    let mut stack = vec![Frame::root()];

    let fail = 'outer: loop
    {
        if cur.is_eof()
        {
            break None;
        }

        let in_scalar_region = matches!(
            stack.last().unwrap().state,
            FrameState::ReadScalar | FrameState::ReadScalarBlock
        );
        let is_new_line = cur.is_fresh_line();
        let mut indent = 0usize;

        if is_new_line
        {
            indent = match cur.read_line_indentation()
            {
                Ok(i) => i,
                Err(kind) => break Some(kind),
            };

            if indent == 0
            {
                if let Some((marker, len)) = detect_marker(&cur)
                {
                    match marker
                    {
                        Marker::Start
                            if stack.len() == 1 && stack[0].kind == FrameKind::Unknown =>
                        {
                            cur.bump_n(len);
                            skip_rest_of_line(&mut cur, handler);
                            continue 'outer;
                        },
                        Marker::End =>
                        {
                            cur.bump_n(len);
                            skip_rest_of_line(&mut cur, handler);
                            pop_all(&mut stack, handler);
                            break None;
                        },
                        Marker::Start =>
                        {
                            // '---' found somewhere other than a legal document-start
                            // position; treat the bytes as ordinary content below.
                        },
                    }
                }
            }

            let blank = line_is_empty(&cur) || (!in_scalar_region && cur.peek() == Some(b'#'));

            if blank
            {
                if !in_scalar_region
                {
                    skip_rest_of_line(&mut cur, handler);
                    continue 'outer;
                }
                // Inside a scalar/scalar-block: fall through to dispatch below so the
                // state function can record this as an empty fragment. The dedent
                // arbiter is skipped on purpose -- a blank line's own indentation (0)
                // carries no structural meaning.
            }
            else if let Err(kind) = dedent_arbiter(&mut stack, indent, handler)
            {
                break Some(kind);
            }
        }
        else
        {
            cur.skip_blanks();

            if !in_scalar_region && cur.at_line_end_or_comment()
            {
                skip_rest_of_line(&mut cur, handler);
                continue 'outer;
            }
        }

        if stack.len() > options.get_max_depth()
        {
            break Some(ErrorKind::ReachedStackMaxDepth);
        }

        let state = stack.last().unwrap().state;

        let step = match state
        {
            FrameState::FindValue =>
            {
                step_find_value(&mut cur, &mut stack, handler, is_new_line, options)
            },
            FrameState::ReadScalar => step_read_scalar(&mut cur, &mut stack, handler),
            FrameState::ReadScalarBlock =>
            {
                step_read_scalar_block(&mut cur, &mut stack, handler, indent)
            },
            FrameState::ReadKey => step_read_key(&mut cur, &mut stack, handler),
            FrameState::ReadEntry => step_read_entry(&mut cur, &mut stack, handler, options),
            FrameState::Closed => Err(ErrorKind::UnexpectedToken),
        };

        if let Err(kind) = step
        {
            break Some(kind);
        }
    };

    if fail.is_none()
    {
        pop_all(&mut stack, handler);
    }

    Outcome {
        fail,
        remaining: cur.rest(),
        current_line: cur.line(),
        at: cur.byte_offset(),
        column: cur.column(),
    }
}

enum Marker
{
    Start,
    End,
}

/// Recognise `---`/`...` at column 0, returning the marker
/// kind and how many bytes (including any trailing blanks
/// up to the terminator) to consume.
fn detect_marker(cur: &Cursor<'_>) -> Option<(Marker, usize)>
{
    let rest = cur.rest();

    let marker = if rest.starts_with(b"---")
    {
        Marker::Start
    }
    else if rest.starts_with(b"...")
    {
        Marker::End
    }
    else
    {
        return None;
    };

    let mut i = 3;

    while rest.get(i).copied().map(Cursor::is_blank).unwrap_or(false)
    {
        i += 1;
    }

    match rest.get(i).copied()
    {
        None => Some((marker, i)),
        Some(b) if Cursor::is_break(b) || b == b'#' => Some((marker, i)),
        _ => None,
    }
}

fn line_is_empty(cur: &Cursor<'_>) -> bool
{
    match cur.peek()
    {
        None => true,
        Some(b) => Cursor::is_break(b),
    }
}

fn advance_past_newline(cur: &mut Cursor<'_>)
{
    if let Some(b) = cur.peek()
    {
        if Cursor::is_break(b)
        {
            cur.bump();
        }
    }
}

fn consume_to_eol(cur: &mut Cursor<'_>)
{
    while let Some(b) = cur.peek()
    {
        if Cursor::is_break(b)
        {
            break;
        }

        cur.bump_n(1);
    }
}

fn trim_trailing_blanks(bytes: &[u8]) -> &[u8]
{
    let end = bytes
        .iter()
        .rposition(|b| !Cursor::is_blank(*b))
        .map(|i| i + 1)
        .unwrap_or(0);

    &bytes[..end]
}

/// Consume an optional trailing `#` comment and the line
/// break (or EOF) that ends the current line. Used for
/// lines the driver has already decided carry no
/// content-bearing frame transition.
fn skip_rest_of_line<'de, H>(cur: &mut Cursor<'de>, handler: &mut H)
where
    H: Handler<'de>,
{
    cur.skip_blanks();

    if cur.peek() == Some(b'#')
    {
        let body = cur.read_comment();
        handler.comment(body);
    }

    advance_past_newline(cur);
}

fn pop_frame<'de, H>(handler: &mut H, frame: &Frame)
where
    H: Handler<'de>,
{
    match frame.kind
    {
        FrameKind::Unknown => handler.null(),
        FrameKind::Scalar | FrameKind::ScalarBlock => handler.end_scalar(),
        FrameKind::Object => handler.end_object(),
        FrameKind::Sequence => handler.end_array(),
        FrameKind::Closed => {},
    }
}

fn pop_all<'de, H>(stack: &mut Vec<Frame>, handler: &mut H)
where
    H: Handler<'de>,
{
    while let Some(frame) = stack.pop()
    {
        pop_frame(handler, &frame);
    }
}

/// Pop the scalar currently open, even if it is the root
/// frame. The root is never physically removed from the
/// stack (the driver relies on it always being non-empty);
/// instead it is marked [`FrameKind::Closed`] so that any
/// further non-blank content is reported as
/// [`ErrorKind::UnexpectedToken`].
fn pop_current_frame<'de, H>(stack: &mut Vec<Frame>, handler: &mut H)
where
    H: Handler<'de>,
{
    if stack.len() > 1
    {
        let frame = stack.pop().unwrap();
        pop_frame(handler, &frame);
    }
    else
    {
        let frame = stack.last_mut().unwrap();
        pop_frame(handler, frame);
        frame.kind = FrameKind::Closed;
        frame.state = FrameState::Closed;
    }
}

/// Pop every frame whose recorded indent exceeds `indent`.
/// If anything was popped, the newly exposed `Object`/
/// `Sequence` frame's indent (the only kinds that carry a
/// real column) must equal `indent` exactly.
fn dedent_arbiter<'de, H>(
    stack: &mut Vec<Frame>,
    indent: usize,
    handler: &mut H,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let mut popped = false;

    while stack.len() > 1 && stack.last().unwrap().indent > indent
    {
        let frame = stack.pop().unwrap();
        pop_frame(handler, &frame);
        popped = true;
    }

    if popped
    {
        let top = stack.last().unwrap();

        if matches!(top.kind, FrameKind::Object | FrameKind::Sequence) && top.indent != indent
        {
            return Err(ErrorKind::BadIndentation);
        }
    }

    Ok(())
}

fn next_ends_key_colon(cur: &Cursor<'_>) -> bool
{
    cur.peek_at(1)
        .map(|b| Cursor::is_blank(b) || Cursor::is_break(b))
        .unwrap_or(true)
}

fn next_ends_dash(cur: &Cursor<'_>) -> bool
{
    cur.peek_at(1)
        .map(|b| Cursor::is_blank(b) || Cursor::is_break(b))
        .unwrap_or(true)
}

fn step_find_value<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    is_new_line: bool,
    options: &Options,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    match cur.peek().unwrap()
    {
        b'|' | b'>' => begin_scalar_block(cur, stack, handler),
        b'-' if next_ends_dash(cur) => begin_sequence_entry(cur, stack, handler, options),
        _ => scan_value_token(cur, stack, handler, is_new_line),
    }
}

fn begin_scalar_block<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let indicator = cur.peek().unwrap();
    cur.bump_n(1);

    let mut chomping = Chomping::Clip;

    match cur.peek()
    {
        Some(b'-') =>
        {
            chomping = Chomping::Strip;
            cur.bump_n(1);
        },
        Some(b'+') =>
        {
            chomping = Chomping::Keep;
            cur.bump_n(1);
        },
        _ => {},
    }

    cur.skip_blanks();

    match cur.peek()
    {
        None => {},
        Some(b) if Cursor::is_break(b) => {},
        Some(b'#') =>
        {
            let body = cur.read_comment();
            handler.comment(body);
        },
        _ => return Err(ErrorKind::ExpectedLineBreak),
    }

    advance_past_newline(cur);

    let style = if indicator == b'|'
    {
        BlockStyle::Literal
    }
    else
    {
        BlockStyle::Folded
    };

    let frame = stack.last_mut().unwrap();
    frame.kind = FrameKind::ScalarBlock;
    frame.state = FrameState::ReadScalarBlock;
    frame.block_style = style;
    frame.chomping = chomping;
    frame.processed_lines = 0;

    handler.start_scalar(style, chomping);

    Ok(())
}

fn begin_sequence_entry<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    options: &Options,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let column = cur.column();

    cur.bump_n(1);

    if cur.peek().map(Cursor::is_blank).unwrap_or(false)
    {
        cur.bump_n(1);
    }

    let frame = stack.last_mut().unwrap();

    if frame.kind != FrameKind::Sequence
    {
        frame.kind = FrameKind::Sequence;
        frame.indent = column;
        handler.start_array();
    }

    frame.state = FrameState::ReadEntry;

    let child_indent = frame.indent + 1;

    enter_value_child(cur, stack, handler, child_indent, options)
}

/// Push a fresh `FindValue` child frame for a sequence entry's value,
/// immediately following a just-consumed `-` marker, and parse that
/// token right away rather than waiting for the driver's next
/// iteration -- by then `cur.is_fresh_line()` is already false, which
/// would wrongly tell `scan_value_token`'s key check that this token is
/// a continuation rather than the entry's own first token. (A mapping
/// key's value is not re-dispatched this way: a nested key is never
/// legal on the same line as its parent's `:`, so the deferred dispatch
/// `step_read_key`/`begin_object_key` already use is correct there.)
///
/// Re-checks `max_depth` itself: this recursive chain can grow the
/// stack several times over within a single physical line (`"- - - x"`),
/// without ever passing back through the driver's own per-line check.
fn enter_value_child<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    child_indent: usize,
    options: &Options,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    stack.push(Frame::unknown(child_indent));

    if stack.len() > options.get_max_depth()
    {
        return Err(ErrorKind::ReachedStackMaxDepth);
    }

    if cur.is_eof()
    {
        return Ok(());
    }

    step_find_value(cur, stack, handler, true, options)
}

fn scan_value_token<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    is_new_line: bool,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let column = cur.column();
    let start = cur.byte_offset();
    let mut prev_was_blank = false;

    loop
    {
        match cur.peek()
        {
            Some(b':') if next_ends_key_colon(cur) =>
            {
                if !is_new_line
                {
                    return Err(ErrorKind::UnexpectedKey);
                }

                return begin_object_key(cur, stack, handler, start, cur.byte_offset(), column);
            },
            Some(b'#') if prev_was_blank => break,
            None => break,
            Some(b) if Cursor::is_break(b) => break,
            Some(b) =>
            {
                prev_was_blank = Cursor::is_blank(b);
                cur.bump_n(1);
            },
        }
    }

    let end = cur.byte_offset();

    finish_plain_scalar_first_line(cur, stack, handler, start, end)
}

fn begin_object_key<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    key_start: usize,
    key_end: usize,
    column: usize,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let key = trim_trailing_blanks(cur.slice(key_start, key_end));

    cur.bump_n(1); // ':'

    if cur.peek().map(Cursor::is_blank).unwrap_or(false)
    {
        cur.bump_n(1);
    }

    let frame = stack.last_mut().unwrap();

    if frame.kind != FrameKind::Object
    {
        frame.kind = FrameKind::Object;
        frame.indent = column;
        handler.start_object();
    }

    frame.state = FrameState::ReadKey;
    handler.key(key);

    let child_indent = frame.indent + 1;
    stack.push(Frame::unknown(child_indent));

    Ok(())
}

fn finish_plain_scalar_first_line<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    start: usize,
    end: usize,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let text = trim_trailing_blanks(cur.slice(start, end));
    let terminated_by_comment = cur.peek() == Some(b'#');

    if terminated_by_comment
    {
        let body = cur.read_comment();
        handler.comment(body);
    }

    advance_past_newline(cur);

    if text.is_empty()
    {
        // Nothing but whitespace preceded an inline comment; the frame stays
        // `Unknown` and will resolve to `null` whenever it is eventually popped.
        return Ok(());
    }

    let frame = stack.last_mut().unwrap();
    frame.kind = FrameKind::Scalar;
    frame.state = FrameState::ReadScalar;
    frame.block_style = BlockStyle::Plain;
    frame.chomping = Chomping::Clip;

    handler.start_scalar(BlockStyle::Plain, Chomping::Clip);
    handler.string(text);

    // A comment ends the scalar right here, unlike a plain line break, which
    // leaves the frame open for further continuation lines. Mirrors
    // `step_read_scalar`'s own comment-termination arm, except the root is
    // left open rather than closed -- there is no enclosing frame left to
    // resume into, so nothing is lost by letting it still accept
    // continuation lines.
    if terminated_by_comment && stack.len() > 1
    {
        pop_current_frame(stack, handler);
    }

    Ok(())
}

fn step_read_scalar<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let start = cur.byte_offset();
    let mut prev_was_blank = false;

    loop
    {
        match cur.peek()
        {
            Some(b':') if next_ends_key_colon(cur) => return Err(ErrorKind::UnexpectedKey),
            Some(b'#') if prev_was_blank =>
            {
                let text = trim_trailing_blanks(cur.slice(start, cur.byte_offset()));
                handler.string(text);

                let body = cur.read_comment();
                handler.comment(body);
                advance_past_newline(cur);

                pop_current_frame(stack, handler);

                return Ok(());
            },
            None => break,
            Some(b) if Cursor::is_break(b) => break,
            Some(b) =>
            {
                prev_was_blank = Cursor::is_blank(b);
                cur.bump_n(1);
            },
        }
    }

    let text = trim_trailing_blanks(cur.slice(start, cur.byte_offset()));
    handler.string(text);
    advance_past_newline(cur);

    Ok(())
}

fn step_read_scalar_block<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    indent: usize,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    if line_is_empty(cur)
    {
        handler.string(&[]);
        advance_past_newline(cur);

        return Ok(());
    }

    let frame = stack.last_mut().unwrap();

    if frame.processed_lines == 0
    {
        frame.processed_lines = 1;
        frame.indent = indent;

        let start = cur.byte_offset();
        consume_to_eol(cur);
        let text = cur.slice(start, cur.byte_offset());

        handler.string(text);
        advance_past_newline(cur);

        return Ok(());
    }

    // The generic dedent arbiter already closed this frame were `indent` to fall
    // below its (now real) anchor column, so `indent >= frame.indent` here.
    let pad = indent - frame.indent;
    let start = cur.byte_offset() - pad;

    consume_to_eol(cur);
    let text = cur.slice(start, cur.byte_offset());

    handler.string(text);
    advance_past_newline(cur);

    Ok(())
}

fn step_read_key<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    let start = cur.byte_offset();

    loop
    {
        match cur.peek()
        {
            Some(b':') if next_ends_key_colon(cur) => break,
            None | Some(b'\n') | Some(b'\r') => return Err(ErrorKind::ExpectedKey),
            Some(_) => cur.bump_n(1),
        }
    }

    let key = trim_trailing_blanks(cur.slice(start, cur.byte_offset()));

    cur.bump_n(1); // ':'

    if cur.peek().map(Cursor::is_blank).unwrap_or(false)
    {
        cur.bump_n(1);
    }

    handler.key(key);

    let frame = stack.last_mut().unwrap();
    let child_indent = frame.indent + 1;
    stack.push(Frame::unknown(child_indent));

    Ok(())
}

fn step_read_entry<'de, H>(
    cur: &mut Cursor<'de>,
    stack: &mut Vec<Frame>,
    handler: &mut H,
    options: &Options,
) -> Result<(), ErrorKind>
where
    H: Handler<'de>,
{
    match cur.peek()
    {
        Some(b'#') =>
        {
            let body = cur.read_comment();
            handler.comment(body);
            advance_past_newline(cur);

            Ok(())
        },
        Some(b'-') if next_ends_dash(cur) =>
        {
            cur.bump_n(1);

            if cur.peek().map(Cursor::is_blank).unwrap_or(false)
            {
                cur.bump_n(1);
            }

            let frame = stack.last_mut().unwrap();
            let child_indent = frame.indent + 1;

            enter_value_child(cur, stack, handler, child_indent, options)
        },
        // A column that matches an open sequence's anchor but carries neither
        // another entry marker nor a comment has no dedicated result code in
        // this system; it is treated as an indentation inconsistency.
        _ => Err(ErrorKind::BadIndentation),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::event::types::{BlockStyle, Chomping};

    #[derive(Default)]
    struct Recorder
    {
        events: Vec<String>,
    }

    impl<'de> Handler<'de> for Recorder
    {
        fn null(&mut self)
        {
            self.events.push("null".into());
        }

        fn start_scalar(&mut self, style: BlockStyle, chomping: Chomping)
        {
            self.events.push(format!("start_scalar({:?},{:?})", style, chomping));
        }

        fn end_scalar(&mut self)
        {
            self.events.push("end_scalar".into());
        }

        fn start_object(&mut self)
        {
            self.events.push("start_object".into());
        }

        fn end_object(&mut self)
        {
            self.events.push("end_object".into());
        }

        fn start_array(&mut self)
        {
            self.events.push("start_array".into());
        }

        fn end_array(&mut self)
        {
            self.events.push("end_array".into());
        }

        fn string(&mut self, bytes: &'de [u8])
        {
            self.events
                .push(format!("string({:?})", String::from_utf8_lossy(bytes)));
        }

        fn key(&mut self, bytes: &'de [u8])
        {
            self.events
                .push(format!("key({:?})", String::from_utf8_lossy(bytes)));
        }

        fn comment(&mut self, bytes: &'de [u8])
        {
            self.events
                .push(format!("comment({:?})", String::from_utf8_lossy(bytes)));
        }
    }

    fn run(input: &[u8]) -> (crate::ResultCode, Vec<String>)
    {
        let mut rec = Recorder::default();
        let outcome = drive(input, &mut rec, &Options::new());

        (outcome.result(), rec.events)
    }

    #[test]
    fn empty_input_is_null()
    {
        let (code, events) = run(b"");

        assert_eq!(code, crate::ResultCode::Success);
        assert_eq!(events, vec!["null".to_string()]);
    }

    #[test]
    fn blank_lines_only_is_null()
    {
        let (code, events) = run(b"  \n    \n");

        assert_eq!(code, crate::ResultCode::Success);
        assert_eq!(events, vec!["null".to_string()]);
    }

    #[test]
    fn four_key_object()
    {
        let input = b"key 1: test 1\nkey 2: test 2\nkey 3: test 3\nkey 4: test 4\n";
        let (code, events) = run(input);

        assert_eq!(code, crate::ResultCode::Success);
        assert_eq!(events[0], "start_object");
        assert_eq!(events[1], "key(\"key 1\")");
        assert!(events.contains(&"string(\"test 1\")".to_string()));
        assert_eq!(events.last().unwrap(), "end_object");
    }

    #[test]
    fn four_element_sequence()
    {
        let input = b"- test 1\n- test 2\n- test 3\n- test 4\n";
        let (code, events) = run(input);

        assert_eq!(code, crate::ResultCode::Success);
        assert_eq!(events[0], "start_array");
        assert_eq!(events.last().unwrap(), "end_array");
        assert_eq!(events.iter().filter(|e| e.as_str() == "start_array").count(), 1);
    }

    #[test]
    fn multiline_plain_scalar_gaps()
    {
        let input = b"first\nsecond\n\nthird\n\n\nfourth\n\n\n";
        let (code, events) = run(input);

        assert_eq!(code, crate::ResultCode::Success);

        let fragments: Vec<_> = events
            .iter()
            .filter(|e| e.starts_with("string("))
            .collect();

        assert_eq!(fragments.len(), 7);
    }

    #[test]
    fn tab_in_indentation_fails()
    {
        let (code, _) = run(b"  \tkey: v\n");

        assert_eq!(code, crate::ResultCode::ForbiddenTabIndentation);
    }

    #[test]
    fn scalar_block_header_garbage_fails()
    {
        let (code, _) = run(b"|- garbage\n body\n");

        assert_eq!(code, crate::ResultCode::ExpectedLineBreak);
    }

    #[test]
    fn literal_block_keep_chomping_preserves_trailing_blanks()
    {
        let input = b"|+\n  line one\n  line two\n\n\n";
        let (code, events) = run(input);

        assert_eq!(code, crate::ResultCode::Success);
        assert_eq!(events[0], "start_scalar(Literal,Keep)");
    }

    #[test]
    fn dash_like_content_is_not_a_sequence()
    {
        let (code, events) = run(b"-test\n");

        assert_eq!(code, crate::ResultCode::Success);
        assert!(!events.contains(&"start_array".to_string()));
    }

    #[test]
    fn max_depth_is_enforced()
    {
        let input = b"a:\n b:\n  c:\n   d: v\n";
        let mut rec = Recorder::default();
        let outcome = drive(input, &mut rec, &Options::new().max_depth(2));

        assert_eq!(outcome.result(), crate::ResultCode::ReachedStackMaxDepth);
    }
}
