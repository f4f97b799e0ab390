/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Parser-internal state: the container stack, the current sub-machine
//! mode, and the deferred/pending bookkeeping each needs.

use std::collections::HashSet;

use crate::{error::internal::ErrorCode, lexer::MAX_DEPTH};

/// What kind of container a [`Frame`] on the stack represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerKind
{
    Mapping,
    Sequence,
}

/// A single open container: its kind, and the indent its entries are
/// written at.
#[derive(Debug)]
pub(crate) struct Frame
{
    pub kind:   ContainerKind,
    pub indent: usize,
    /// Keys already seen at this mapping, for duplicate-key detection.
    /// Always `None` for a sequence frame.
    keys: Option<HashSet<String>>,
}

impl Frame
{
    fn new(kind: ContainerKind, indent: usize) -> Self
    {
        let keys = match kind
        {
            ContainerKind::Mapping => Some(HashSet::new()),
            ContainerKind::Sequence => None,
        };

        Self { kind, indent, keys }
    }

    /// Record `key`, failing with [`ErrorCode::DuplicateKey`] if it was
    /// already seen at this mapping.
    ///
    /// A no-op on a sequence frame.
    pub fn observe_key(&mut self, key: &str) -> Result<(), ErrorCode>
    {
        match &mut self.keys
        {
            Some(seen) if !seen.insert(key.to_owned()) => Err(ErrorCode::DuplicateKey),
            _ => Ok(()),
        }
    }
}

/// The bounded container stack.
///
/// A `Vec` backs this rather than a fixed `[Frame; MAX_DEPTH]` array, but
/// the bound is enforced on every push — the two are observably
/// equivalent, and the `Vec` spares us an `Option<Frame>` fill value.
#[derive(Debug, Default)]
pub(crate) struct Containers
{
    frames: Vec<Frame>,
}

impl Containers
{
    pub fn push(&mut self, kind: ContainerKind, indent: usize) -> Result<(), ErrorCode>
    {
        if self.frames.len() >= MAX_DEPTH
        {
            return Err(ErrorCode::NestingTooDeep);
        }

        self.frames.push(Frame::new(kind, indent));

        Ok(())
    }

    pub fn pop(&mut self) -> Option<Frame>
    {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame>
    {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame>
    {
        self.frames.last_mut()
    }

    pub fn depth(&self) -> usize
    {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.frames.is_empty()
    }
}

/// A run of blank lines seen inside a block literal whose disposition
/// (interior vs. trailing) cannot be decided until the following
/// non-blank line, or EOF, is seen.
///
/// This is the deferred decision the block-literal sub-machine must make
/// without lookahead: accumulate the run as a count plus the first
/// line's number, then resolve it once the next line arrives.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingBlanks
{
    pub count:      u64,
    pub first_line: u64,
}

/// State private to the block-literal sub-machine, carried between
/// [`Parser::next_event`](super::parser::Parser::next_event) calls while
/// a `|` scalar is being read.
#[derive(Debug)]
pub(crate) struct BlockState
{
    /// Indent of the `|` header itself.
    pub header_indent: usize,
    /// Indent block content lines are stripped to; `header_indent + 2`.
    pub content_indent: usize,
    /// Whether any content line has been emitted yet (used to detect a
    /// leading blank line).
    pub started: bool,
    /// A run of blank lines seen but not yet resolved.
    pub pending_blanks: Option<PendingBlanks>,
}

impl BlockState
{
    pub fn new(header_indent: usize) -> Self
    {
        Self {
            header_indent,
            content_indent: header_indent + 2,
            started: false,
            pending_blanks: None,
        }
    }
}

/// Which sub-machine is currently driving line dispatch.
///
/// The flow sub-machine has no persistent variant here: a flow sequence
/// is confined to a single physical line, so it is parsed eagerly and
/// entirely within one [`Parser::next_event`](super::parser::Parser::next_event)
/// call, never needing to survive across calls the way block-literal
/// state must.
#[derive(Debug)]
pub(crate) enum Mode
{
    Normal,
    Block(BlockState),
}
