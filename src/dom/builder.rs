/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The [`Handler`] implementation that turns an event
//! stream into an arena of [`Storage`] nodes.

use super::{
    graph::{Arena, NodeIndex, ObjectData, ScalarData, SequenceData, Storage},
    scalar::is_null_token,
};
use crate::event::{
    types::{BlockStyle, Chomping},
    Handler,
};

pub(super) struct DomBuilder<'de>
{
    arena:       Arena<'de>,
    /// Currently open containers/scalars, innermost last.
    open:        Vec<NodeIndex>,
    /// The key most recently emitted by `key()`, not yet
    /// consumed by the `start_*`/`null` that follows it.
    pending_key: Option<&'de [u8]>,
    root:        Option<NodeIndex>,
}

impl<'de> DomBuilder<'de>
{
    pub fn new() -> Self
    {
        Self {
            arena: Arena::default(),
            open: Vec::new(),
            pending_key: None,
            root: None,
        }
    }

    pub fn into_parts(self) -> (Arena<'de>, NodeIndex)
    {
        let root = self
            .root
            .expect("the driver always attaches exactly one root frame before returning");

        (self.arena, root)
    }

    fn attach(&mut self, idx: NodeIndex)
    {
        match self.open.last().copied()
        {
            None =>
            {
                self.root = Some(idx);
            },
            Some(parent) => match &mut self.arena[parent]
            {
                Storage::Object(data) =>
                {
                    let key = self
                        .pending_key
                        .take()
                        .expect("a key() always precedes a value inside an open object");
                    data.entries.push((key, idx));
                },
                Storage::Sequence(data) =>
                {
                    data.elements.push(idx);
                },
                _ => unreachable!("the only open containers are objects and sequences"),
            },
        }
    }
}

impl<'de> Handler<'de> for DomBuilder<'de>
{
    fn null(&mut self)
    {
        let idx = self.arena.insert(Storage::Null);
        self.attach(idx);
    }

    fn start_scalar(&mut self, style: BlockStyle, chomping: Chomping)
    {
        let idx = self.arena.insert(Storage::Scalar(ScalarData::new(style, chomping)));
        self.attach(idx);
        self.open.push(idx);
    }

    fn end_scalar(&mut self)
    {
        let idx = *self.open.last().expect("end_scalar without a matching start_scalar");

        let fold_to_null = matches!(
            &self.arena[idx],
            Storage::Scalar(data)
                if data.style == BlockStyle::Plain
                    && data.fragments.len() == 1
                    && is_null_token(data.fragments[0])
        );

        if fold_to_null
        {
            self.arena[idx] = Storage::Null;
        }

        self.open.pop();
    }

    fn start_object(&mut self)
    {
        let idx = self.arena.insert(Storage::Object(ObjectData::default()));
        self.attach(idx);
        self.open.push(idx);
    }

    fn end_object(&mut self)
    {
        self.open.pop();
    }

    fn start_array(&mut self)
    {
        let idx = self.arena.insert(Storage::Sequence(SequenceData::default()));
        self.attach(idx);
        self.open.push(idx);
    }

    fn end_array(&mut self)
    {
        self.open.pop();
    }

    fn string(&mut self, bytes: &'de [u8])
    {
        let idx = *self.open.last().expect("string event without an open scalar");

        match &mut self.arena[idx]
        {
            Storage::Scalar(data) => data.fragments.push(bytes),
            _ => unreachable!("string events only occur within an open scalar"),
        }
    }

    fn key(&mut self, bytes: &'de [u8])
    {
        self.pending_key = Some(bytes);
    }

    // Comments are not retained in the DOM.
}
