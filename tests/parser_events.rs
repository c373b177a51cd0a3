/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Black-box coverage of the streaming event API, driven
//! entirely through [`yarrow::event::parse`].

use anyhow::Result;
use pretty_assertions::assert_eq;
use yarrow::{
    event::{self, types::BlockStyle, Handler},
    Options, ResultCode,
};

#[derive(Default, Debug, PartialEq, Eq)]
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

    fn start_scalar(&mut self, style: BlockStyle, _chomping: yarrow::event::types::Chomping)
    {
        self.events.push(format!("start_scalar({:?})", style));
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
        self.events.push(format!("\"{}\"", String::from_utf8_lossy(bytes)));
    }

    fn key(&mut self, bytes: &'de [u8])
    {
        self.events.push(format!("key:{}", String::from_utf8_lossy(bytes)));
    }

    fn comment(&mut self, bytes: &'de [u8])
    {
        self.events.push(format!("#{}", String::from_utf8_lossy(bytes)));
    }
}

fn record(input: &[u8]) -> Recorder
{
    let mut rec = Recorder::default();
    event::parse(input, &mut rec).expect("parse should succeed");

    rec
}

#[test]
fn empty_input_produces_a_single_null_event() -> Result<()>
{
    let rec = record(b"");

    assert_eq!(rec.events, vec!["null".to_string()]);

    Ok(())
}

#[test]
fn four_key_object_emits_balanced_object_events() -> Result<()>
{
    let input = b"key 1: test 1\nkey 2: test 2\nkey 3: test 3\nkey 4: test 4\n";
    let rec = record(input);

    assert_eq!(rec.events[0], "start_object");
    assert_eq!(rec.events[1], "key:key 1");
    assert!(rec.events.contains(&"\"test 1\"".to_string()));
    assert_eq!(rec.events.last().unwrap(), "end_object");

    let start_objects = rec.events.iter().filter(|e| *e == "start_object").count();
    let end_objects = rec.events.iter().filter(|e| *e == "end_object").count();
    assert_eq!(start_objects, end_objects);

    Ok(())
}

#[test]
fn sequence_of_scalars_emits_balanced_array_events() -> Result<()>
{
    let input = b"- test 1\n- test 2\n- test 3\n- test 4\n";
    let rec = record(input);

    assert_eq!(rec.events[0], "start_array");
    assert_eq!(rec.events.last().unwrap(), "end_array");
    assert_eq!(rec.events.iter().filter(|e| *e == "start_array").count(), 1);

    Ok(())
}

#[test]
fn sequence_of_single_key_mappings_reuses_one_frame() -> Result<()>
{
    let input = b"- a: 1\n- b: 2\n- c: 3\n";
    let rec = record(input);

    assert_eq!(rec.events.iter().filter(|e| *e == "start_array").count(), 1);
    assert_eq!(rec.events.iter().filter(|e| *e == "start_object").count(), 3);
    assert_eq!(rec.events.iter().filter(|e| *e == "end_object").count(), 3);

    Ok(())
}

#[test]
fn multiline_plain_scalar_retains_every_fragment() -> Result<()>
{
    let input = b"first\nsecond\n\nthird\n\n\nfourth\n\n\n";
    let rec = record(input);

    let fragments = rec.events.iter().filter(|e| e.starts_with('"')).count();
    assert_eq!(fragments, 7);

    Ok(())
}

#[test]
fn tab_in_indentation_reports_forbidden_tab() -> Result<()>
{
    let mut rec = Recorder::default();
    let err = event::parse(b"  \tkey: v\n", &mut rec).unwrap_err();

    assert_eq!(err.code(), ResultCode::ForbiddenTabIndentation);
    assert_eq!(err.line(), 0);

    Ok(())
}

#[test]
fn scalar_block_header_with_trailing_garbage_fails() -> Result<()>
{
    let mut rec = Recorder::default();
    let err = event::parse(b"|- garbage\n body\n", &mut rec).unwrap_err();

    assert_eq!(err.code(), ResultCode::ExpectedLineBreak);

    Ok(())
}

#[test]
fn dash_like_plain_scalars_are_not_sequence_entries() -> Result<()>
{
    for input in [&b"-5\n"[..], b"-test\n", b"--foo\n"]
    {
        let rec = record(input);

        assert!(
            !rec.events.contains(&"start_array".to_string()),
            "{:?} was mistaken for a sequence entry",
            input
        );
    }

    Ok(())
}

#[test]
fn document_end_marker_terminates_parse_regardless_of_nesting() -> Result<()>
{
    let input = b"a:\n b: 1\n...\nc: 2\n";
    let mut rec = Recorder::default();
    let outcome = event::parse(input, &mut rec);

    assert!(outcome.is_ok());
    assert_eq!(rec.events.iter().filter(|e| *e == "end_object").count(), 2);

    Ok(())
}

#[test]
fn max_depth_is_enforced_and_reports_the_offending_line() -> Result<()>
{
    let input = b"a:\n b:\n  c:\n   d: v\n";
    let mut rec = Recorder::default();
    let options = Options::new().max_depth(2);
    let err = event::parse_with(input, &mut rec, &options).unwrap_err();

    assert_eq!(err.code(), ResultCode::ReachedStackMaxDepth);
    assert_eq!(err.line(), 2);

    Ok(())
}
