/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalar materialisation and typed conversion rules.
//!
//! Everything upstream of this module stays at the byte
//! level; this is the one place a best-effort UTF-8
//! interpretation happens, and only because a `bool`/`i64`/
//! `f64` conversion has nowhere else to live.

use crate::event::types::{BlockStyle, Chomping};

const NULL_TOKENS: [&[u8]; 4] = [b"null", b"Null", b"NULL", b"~"];

pub(super) fn is_null_token(fragment: &[u8]) -> bool
{
    NULL_TOKENS.contains(&fragment)
}

/// Join line fragments, folding blank-fragment runs to that
/// many literal newlines and non-blank runs to a single
/// space-joined string.
fn fold_runs(fragments: &[&[u8]]) -> String
{
    let mut out = String::new();
    let mut blank_run = 0usize;
    let mut run: Vec<&[u8]> = Vec::new();

    for frag in fragments
    {
        if frag.is_empty()
        {
            blank_run += 1;
            continue;
        }

        if blank_run > 0
        {
            flush_run(&mut out, &mut run);
            out.push_str(&"\n".repeat(blank_run));
            blank_run = 0;
        }

        run.push(frag);
    }

    flush_run(&mut out, &mut run);

    out
}

fn flush_run(out: &mut String, run: &mut Vec<&[u8]>)
{
    if run.is_empty()
    {
        return;
    }

    let joined = run
        .iter()
        .map(|b| String::from_utf8_lossy(b))
        .collect::<Vec<_>>()
        .join(" ");

    out.push_str(&joined);
    run.clear();
}

fn materialize_plain(fragments: &[&[u8]]) -> String
{
    let first = fragments.iter().position(|f| !f.is_empty());
    let last = fragments.iter().rposition(|f| !f.is_empty());

    let (first, last) = match (first, last)
    {
        (Some(f), Some(l)) => (f, l),
        _ => return String::new(),
    };

    fold_runs(&fragments[first..=last])
}

/// Split off the trailing run of empty-string fragments,
/// returning the content slice and how many blank lines
/// followed it.
fn split_trailing_blanks<'a>(fragments: &'a [&'a [u8]]) -> (&'a [&'a [u8]], usize)
{
    let mut n = 0;

    while n < fragments.len() && fragments[fragments.len() - 1 - n].is_empty()
    {
        n += 1;
    }

    (&fragments[..fragments.len() - n], n)
}

fn apply_chomping(base: String, trailing_blanks: usize, chomping: Chomping) -> String
{
    match chomping
    {
        Chomping::Strip => base,
        Chomping::Clip =>
        {
            if base.is_empty() && trailing_blanks == 0
            {
                base
            }
            else
            {
                format!("{}\n", base)
            }
        },
        Chomping::Keep => format!("{}{}", base, "\n".repeat(trailing_blanks + 1)),
    }
}

fn materialize_literal(fragments: &[&[u8]], chomping: Chomping) -> String
{
    let (content, trailing) = split_trailing_blanks(fragments);

    let base = content
        .iter()
        .map(|b| String::from_utf8_lossy(b))
        .collect::<Vec<_>>()
        .join("\n");

    apply_chomping(base, trailing, chomping)
}

fn materialize_folded(fragments: &[&[u8]], chomping: Chomping) -> String
{
    let (content, trailing) = split_trailing_blanks(fragments);
    let base = fold_runs(content);

    apply_chomping(base, trailing, chomping)
}

/// Quoted styles are DOM-only: they are never produced by
/// this crate's own parser, only reachable from a
/// hand-assembled scalar fed directly into the arena.
fn materialize_quoted(fragments: &[&[u8]]) -> String
{
    let mut out = String::new();
    let mut blank_run = 0usize;
    let mut run: Vec<&[u8]> = Vec::new();
    let mut first = true;

    for frag in fragments
    {
        if frag.is_empty()
        {
            blank_run += 1;
            continue;
        }

        if blank_run > 0
        {
            flush_run(&mut out, &mut run);
            out.push('\n');
            blank_run = 0;
        }
        else if !first && run.is_empty() && !out.is_empty()
        {
            out.push(' ');
        }

        first = false;
        run.push(frag);
    }

    flush_run(&mut out, &mut run);

    out
}

pub(super) fn materialize(fragments: &[&[u8]], style: BlockStyle, chomping: Chomping) -> String
{
    match style
    {
        BlockStyle::Plain => materialize_plain(fragments),
        BlockStyle::Literal => materialize_literal(fragments, chomping),
        BlockStyle::Folded => materialize_folded(fragments, chomping),
        BlockStyle::SingleQuoted | BlockStyle::DoubleQuoted => materialize_quoted(fragments),
    }
}

fn detect_radix(text: &str) -> (u32, &str)
{
    if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
    {
        return (16, rest);
    }

    if text.len() > 1
        && text.starts_with('0')
        && text.as_bytes()[1..].iter().all(|b| (b'0'..=b'7').contains(b))
    {
        return (8, &text[1..]);
    }

    (10, text)
}

fn parse_signed(text: &str) -> Option<i64>
{
    let text = text.trim();

    let (sign, rest) = if let Some(rest) = text.strip_prefix('-')
    {
        (-1i64, rest)
    }
    else
    {
        (1i64, text.strip_prefix('+').unwrap_or(text))
    };

    let (radix, digits) = detect_radix(rest);

    if radix == 10
    {
        return atoi::atoi::<i64>(digits.as_bytes()).map(|value| value * sign);
    }

    i64::from_str_radix(digits, radix).ok().map(|value| value * sign)
}

fn parse_unsigned(text: &str) -> Option<u64>
{
    let text = text.trim();

    if let Some(rest) = text.strip_prefix('-')
    {
        let (radix, digits) = detect_radix(rest);

        let magnitude = if radix == 10
        {
            atoi::atoi::<u64>(digits.as_bytes())?
        }
        else
        {
            u64::from_str_radix(digits, radix).ok()?
        };

        return Some(magnitude.wrapping_neg());
    }

    let rest = text.strip_prefix('+').unwrap_or(text);
    let (radix, digits) = detect_radix(rest);

    if radix == 10
    {
        return atoi::atoi::<u64>(digits.as_bytes());
    }

    u64::from_str_radix(digits, radix).ok()
}

pub(super) fn as_bool(text: &str, default: bool) -> bool
{
    match text.trim()
    {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" => true,
        "false" | "False" | "FALSE" | "no" | "No" | "NO" => false,
        _ => default,
    }
}

pub(super) fn as_i64(text: &str, default: i64) -> i64
{
    if text.trim().is_empty()
    {
        return default;
    }

    parse_signed(text).unwrap_or(default)
}

pub(super) fn as_u64(text: &str, default: u64) -> u64
{
    if text.trim().is_empty()
    {
        return default;
    }

    parse_unsigned(text).unwrap_or(default)
}

pub(super) fn as_f64(text: &str, default: f64) -> f64
{
    let text = text.trim();

    if text.is_empty()
    {
        return default;
    }

    text.parse::<f64>().unwrap_or(default)
}
