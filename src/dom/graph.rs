/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Node storage: a `slotmap`-indexed arena, following the
//! same split this crate uses elsewhere between an opaque
//! index type and the data it addresses.
//!
//! Unlike a general YAML node graph this arena never needs
//! anchors or aliases -- every node has exactly one owner --
//! so there is no secondary map of out-of-band node data to
//! maintain alongside it; each arena slot is simply the
//! node's own storage.

use slotmap::{new_key_type, SlotMap};

use crate::event::types::{BlockStyle, Chomping};

new_key_type! {
    /// Identifies a node within one [`Document`](super::Document).
    ///
    /// Indices from one document are never valid in another;
    /// using one there is safe but produces unspecified
    /// (never useful) results.
    pub(super) struct NodeIndex;
}

#[derive(Debug, Clone)]
pub(super) struct ScalarData<'de>
{
    pub fragments: Vec<&'de [u8]>,
    pub style:     BlockStyle,
    pub chomping:  Chomping,
}

impl<'de> ScalarData<'de>
{
    pub fn new(style: BlockStyle, chomping: Chomping) -> Self
    {
        Self {
            fragments: Vec::new(),
            style,
            chomping,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(super) struct ObjectData<'de>
{
    pub entries: Vec<(&'de [u8], NodeIndex)>,
}

#[derive(Debug, Clone, Default)]
pub(super) struct SequenceData
{
    pub elements: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub(super) enum Storage<'de>
{
    Null,
    Scalar(ScalarData<'de>),
    Object(ObjectData<'de>),
    Sequence(SequenceData),
}

pub(super) type Arena<'de> = SlotMap<NodeIndex, Storage<'de>>;
