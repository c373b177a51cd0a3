/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Black-box coverage of the DOM entry point,
//! [`yarrow::dom::read_document`].

use anyhow::Result;
use pretty_assertions::assert_eq;
use yarrow::{dom, ResultCode};

#[test]
fn blank_only_input_resolves_to_null() -> Result<()>
{
    let doc = dom::read_document(b"  \n    \n");

    assert!(doc.is_success());
    assert!(doc.root().is_null());
    assert_eq!(doc.current_line(), 2);

    Ok(())
}

#[test]
fn object_values_stringify_per_key() -> Result<()>
{
    let input = b"key 1: test 1\nkey 2: test 2\nkey 3: test 3\nkey 4: test 4\n";
    let doc = dom::read_document(input);
    let root = doc.root().as_object().expect("root should be an object");

    assert_eq!(root.len(), 4);

    for (i, expected) in ["test 1", "test 2", "test 3", "test 4"].iter().enumerate()
    {
        let key = format!("key {}", i + 1);
        let value = root.get(key.as_bytes()).expect("key should exist");
        assert_eq!(value.as_scalar().unwrap().text(), *expected);
    }

    Ok(())
}

#[test]
fn sequence_elements_are_scalars_in_order() -> Result<()>
{
    let input = b"- test 1\n- test 2\n- test 3\n- test 4\n";
    let doc = dom::read_document(input);
    let seq = doc.root().as_sequence().expect("root should be a sequence");

    assert_eq!(seq.len(), 4);

    let values: Vec<_> = seq.iter().map(|n| n.as_scalar().unwrap().text()).collect();
    assert_eq!(values, vec!["test 1", "test 2", "test 3", "test 4"]);

    Ok(())
}

#[test]
fn multiline_plain_scalar_materialises_per_fold_rule() -> Result<()>
{
    let input = b"first\nsecond\n\nthird\n\n\nfourth\n\n\n";
    let doc = dom::read_document(input);
    let scalar = doc.root().as_scalar().expect("root should be a scalar");

    assert_eq!(scalar.fragments().len(), 7);
    assert_eq!(scalar.text(), "first second\nthird\n\nfourth");

    Ok(())
}

#[test]
fn null_like_tokens_fold_to_the_null_node()
{
    for input in [&b"null"[..], b"Null", b"NULL", b"~"]
    {
        let doc = dom::read_document(input);

        assert!(doc.root().is_null(), "{:?} should have folded to null", input);
    }
}

#[test]
fn a_plain_scalar_merely_containing_the_word_null_stays_a_scalar()
{
    let doc = dom::read_document(b"this is null, not a null\n");
    let scalar = doc.root().as_scalar().expect("should stay a scalar");

    assert_eq!(scalar.text(), "this is null, not a null");
}

#[test]
fn literal_block_chomping_modes() -> Result<()>
{
    let keep = dom::read_document(b"|+\n  line one\n  line two\n\n\n");
    let strip = dom::read_document(b"|-\n  line one\n  line two\n\n\n");
    let clip = dom::read_document(b"|\n  line one\n  line two\n\n\n");

    assert_eq!(
        keep.root().as_scalar().unwrap().text(),
        "line one\nline two\n\n\n"
    );
    assert_eq!(strip.root().as_scalar().unwrap().text(), "line one\nline two");
    assert_eq!(clip.root().as_scalar().unwrap().text(), "line one\nline two\n");

    Ok(())
}

#[test]
fn typed_conversions_round_trip_documented_tokens() -> Result<()>
{
    let cases = [
        (&b"yes"[..], true),
        (b"Yes", true),
        (b"YES", true),
        (b"no", false),
        (b"No", false),
        (b"NO", false),
    ];

    for (input, expected) in cases
    {
        let doc = dom::read_document(input);
        assert_eq!(doc.root().as_bool(!expected), expected);
    }

    let decimal = dom::read_document(b"42\n");
    assert_eq!(decimal.root().as_i64(0), 42);

    let hex = dom::read_document(b"0x1F\n");
    assert_eq!(hex.root().as_i64(0), 31);

    let octal = dom::read_document(b"017\n");
    assert_eq!(octal.root().as_i64(0), 15);

    let negative_as_unsigned = dom::read_document(b"-1\n");
    assert_eq!(negative_as_unsigned.root().as_u64(0), u64::MAX);

    let float = dom::read_document(b"3.5\n");
    assert_eq!(float.root().as_f64(0.0), 3.5);

    let garbage = dom::read_document(b"not a number\n");
    assert_eq!(garbage.root().as_i64(99), 99);

    Ok(())
}

#[test]
fn typed_conversion_against_a_collection_returns_the_default() -> Result<()>
{
    let doc = dom::read_document(b"key: value\n");

    assert_eq!(doc.root().as_bool(true), true);
    assert_eq!(doc.root().as_i64(-7), -7);

    Ok(())
}

#[test]
fn reached_stack_max_depth_reports_a_non_success_root() -> Result<()>
{
    let input = b"a:\n b:\n  c:\n   d: v\n";
    let options = yarrow::Options::new().max_depth(2);
    let doc = dom::read_document_with(input, &options);

    assert_eq!(doc.result_code(), ResultCode::ReachedStackMaxDepth);

    Ok(())
}
