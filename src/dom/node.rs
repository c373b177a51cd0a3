/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Zero-copy typed views over a [`Document`](super::Document)'s
//! arena.
//!
//! A [`Node`] is a thin, `Copy` handle -- a borrowed document
//! plus an index -- rather than an owned value, mirroring the
//! teacher's `node::graph`/`node::nodes` split minus the
//! back-pointer from a typed view to its owning polymorphic
//! node: here that relationship is just "the same arena,
//! another index", so no back-reference needs to exist.

use super::{
    graph::{NodeIndex, Storage},
    scalar, Document,
};
use crate::event::types::{BlockStyle, Chomping};

/// A node in a parsed document: null, scalar, object, or
/// sequence.
#[derive(Clone, Copy)]
pub struct Node<'a, 'de>
{
    doc: &'a Document<'de>,
    idx: NodeIndex,
}

impl<'a, 'de> Node<'a, 'de>
{
    pub(super) fn new(doc: &'a Document<'de>, idx: NodeIndex) -> Self
    {
        Self { doc, idx }
    }

    fn storage(&self) -> &'a Storage<'de>
    {
        &self.doc.arena[self.idx]
    }

    pub fn is_null(&self) -> bool
    {
        matches!(self.storage(), Storage::Null)
    }

    pub fn as_scalar(&self) -> Option<ScalarView<'a, 'de>>
    {
        match self.storage()
        {
            Storage::Scalar(data) => Some(ScalarView { data }),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<ObjectView<'a, 'de>>
    {
        match self.storage()
        {
            Storage::Object(data) => Some(ObjectView {
                doc: self.doc,
                data,
            }),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<SequenceView<'a, 'de>>
    {
        match self.storage()
        {
            Storage::Sequence(data) => Some(SequenceView {
                doc: self.doc,
                data,
            }),
            _ => None,
        }
    }

    /// `default` if this node is not a scalar, or its
    /// scalar text does not match a recognised token.
    pub fn as_bool(&self, default: bool) -> bool
    {
        self.as_scalar().map(|s| s.as_bool(default)).unwrap_or(default)
    }

    pub fn as_i64(&self, default: i64) -> i64
    {
        self.as_scalar().map(|s| s.as_i64(default)).unwrap_or(default)
    }

    pub fn as_u64(&self, default: u64) -> u64
    {
        self.as_scalar().map(|s| s.as_u64(default)).unwrap_or(default)
    }

    pub fn as_f64(&self, default: f64) -> f64
    {
        self.as_scalar().map(|s| s.as_f64(default)).unwrap_or(default)
    }
}

/// A scalar's raw line fragments plus the style/chomping
/// needed to reassemble them.
pub struct ScalarView<'a, 'de>
{
    data: &'a super::graph::ScalarData<'de>,
}

impl<'a, 'de> ScalarView<'a, 'de>
{
    pub fn style(&self) -> BlockStyle
    {
        self.data.style
    }

    pub fn chomping(&self) -> Chomping
    {
        self.data.chomping
    }

    pub fn fragments(&self) -> &[&'de [u8]]
    {
        &self.data.fragments
    }

    /// Reassemble this scalar's fragments per the
    /// materialisation rule for its style.
    pub fn text(&self) -> String
    {
        scalar::materialize(&self.data.fragments, self.data.style, self.data.chomping)
    }

    pub fn as_bool(&self, default: bool) -> bool
    {
        scalar::as_bool(&self.text(), default)
    }

    pub fn as_i64(&self, default: i64) -> i64
    {
        scalar::as_i64(&self.text(), default)
    }

    pub fn as_u64(&self, default: u64) -> u64
    {
        scalar::as_u64(&self.text(), default)
    }

    pub fn as_f64(&self, default: f64) -> f64
    {
        scalar::as_f64(&self.text(), default)
    }
}

/// An insertion-ordered mapping from byte-string key to
/// child node.
pub struct ObjectView<'a, 'de>
{
    doc:  &'a Document<'de>,
    data: &'a super::graph::ObjectData<'de>,
}

impl<'a, 'de> ObjectView<'a, 'de>
{
    pub fn len(&self) -> usize
    {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.data.entries.is_empty()
    }

    pub fn get(&self, key: &[u8]) -> Option<Node<'a, 'de>>
    {
        self.data
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, idx)| Node::new(self.doc, *idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'de [u8], Node<'a, 'de>)> + '_
    {
        self.data
            .entries
            .iter()
            .map(move |(k, idx)| (*k, Node::new(self.doc, *idx)))
    }
}

/// An ordered list of child nodes.
pub struct SequenceView<'a, 'de>
{
    doc:  &'a Document<'de>,
    data: &'a super::graph::SequenceData,
}

impl<'a, 'de> SequenceView<'a, 'de>
{
    pub fn len(&self) -> usize
    {
        self.data.elements.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.data.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Node<'a, 'de>>
    {
        self.data
            .elements
            .get(index)
            .map(|idx| Node::new(self.doc, *idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = Node<'a, 'de>> + '_
    {
        self.data.elements.iter().map(move |idx| Node::new(self.doc, *idx))
    }
}
