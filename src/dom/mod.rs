/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The document tree (DOM) layer, built atop the streaming
//! [`event`](crate::event) module.
//!
//! [`read_document`] drives the whole input through a
//! [`builder::DomBuilder`] and hands back a [`Document`]
//! owning the resulting arena -- no partial tree escapes a
//! failed parse beyond what [`Document::root`] exposes, since
//! failure still produces whatever was attached up to the
//! fault and the caller is expected to check
//! [`Document::is_success`] first.

mod builder;
mod graph;
mod node;
mod scalar;

pub use node::{Node, ObjectView, ScalarView, SequenceView};

use builder::DomBuilder;
use graph::{Arena, NodeIndex};

use crate::{event::parser, options::Options, ResultCode};

/// The result of reading one document: a result code, the
/// line parsing stopped at, and the node arena itself.
pub struct Document<'de>
{
    arena:        Arena<'de>,
    root:         NodeIndex,
    result_code:  ResultCode,
    current_line: u64,
}

impl<'de> Document<'de>
{
    pub fn result_code(&self) -> ResultCode
    {
        self.result_code
    }

    pub fn is_success(&self) -> bool
    {
        self.result_code == ResultCode::Success
    }

    /// Zero-based line at which parsing stopped (the final
    /// line on success).
    pub fn current_line(&self) -> u64
    {
        self.current_line
    }

    /// The document's root node. The null node on any
    /// non-success result.
    pub fn root(&self) -> Node<'_, 'de>
    {
        Node::new(self, self.root)
    }
}

/// Read a single document from `input` under the
/// [default options](Options::new).
pub fn read_document(input: &[u8]) -> Document<'_>
{
    read_document_with(input, &Options::new())
}

/// Read a single document from `input` under `options`.
pub fn read_document_with<'de>(input: &'de [u8], options: &Options) -> Document<'de>
{
    let mut builder = DomBuilder::new();
    let outcome = parser::drive(input, &mut builder, options);

    let result_code = outcome.result();
    let current_line = outcome.current_line() as u64;
    let (arena, root) = builder.into_parts();

    Document {
        arena,
        root,
        result_code,
        current_line,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_input_is_null_root()
    {
        let doc = read_document(b"");

        assert!(doc.is_success());
        assert!(doc.root().is_null());
    }

    #[test]
    fn null_tokens_fold_to_null_node()
    {
        for input in [&b"null"[..], b"Null", b"NULL", b"~"]
        {
            let doc = read_document(input);

            assert!(doc.is_success());
            assert!(doc.root().is_null(), "{:?} did not fold to null", input);
        }
    }

    #[test]
    fn object_preserves_insertion_order()
    {
        let input = b"key 1: test 1\nkey 2: test 2\nkey 3: test 3\nkey 4: test 4\n";
        let doc = read_document(input);

        assert!(doc.is_success());

        let obj = doc.root().as_object().expect("root should be an object");
        assert_eq!(obj.len(), 4);

        let keys: Vec<_> = obj.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![&b"key 1"[..], b"key 2", b"key 3", b"key 4"]);

        assert_eq!(
            obj.get(b"key 3").unwrap().as_scalar().unwrap().text(),
            "test 3"
        );
    }

    #[test]
    fn sequence_of_scalars()
    {
        let input = b"- test 1\n- test 2\n- test 3\n- test 4\n";
        let doc = read_document(input);

        assert!(doc.is_success());

        let seq = doc.root().as_sequence().expect("root should be a sequence");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(1).unwrap().as_scalar().unwrap().text(), "test 2");
    }

    #[test]
    fn typed_conversion_falls_back_on_wrong_node_type()
    {
        let doc = read_document(b"key: value\n");

        assert_eq!(doc.root().as_i64(42), 42);
    }

    #[test]
    fn tab_indentation_failure_still_reports_partial_position()
    {
        let doc = read_document(b"  \tkey: v\n");

        assert_eq!(doc.result_code(), ResultCode::ForbiddenTabIndentation);
        assert_eq!(doc.current_line(), 0);
    }
}
