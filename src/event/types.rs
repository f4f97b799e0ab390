/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The event alphabet produced by [`crate::event::parser::Parser`].

use std::borrow::Cow;

/// Borrowed-or-owned string slice handed out in events.
///
/// A [`BorrowReader`](crate::reader::borrow::BorrowReader) produces
/// [`Cow::Borrowed`] slices of the caller's own buffer at zero cost; a
/// [`LineReader`](crate::reader::owned::LineReader) over an arbitrary
/// [`std::io::Read`] produces [`Cow::Owned`] slices, one allocation per
/// physical line.
pub type Slice<'a> = Cow<'a, str>;

/// A single parse event, tagged with the physical line it was produced
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<'de>
{
    /// The 1-indexed physical line this event originated on.
    pub line: u64,
    pub data: EventData<'de>,
}

impl<'de> Event<'de>
{
    pub(crate) fn new(line: u64, data: EventData<'de>) -> Self
    {
        Self { line, data }
    }
}

/// The style a sequence was written in.
///
/// Mappings have no corresponding style: SIML has no flow mapping form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStyle
{
    /// `- entry` lines, one per line, at an indent deeper than the key
    /// or entry that introduced the sequence.
    Block,
    /// `[a,b,c]`, whitespace-free and confined to a single physical line.
    Flow,
}

/// The tagged-sum event payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData<'de>
{
    /// Always the first event produced.
    StreamStart,
    /// Always the last event produced.
    StreamEnd,

    /// The start of a `---`-delimited document.
    DocumentStart,
    /// The end of a document, whether implied by a following `---`, or
    /// by end of stream.
    DocumentEnd,

    /// The start of a block mapping. Always closed by a matching
    /// [`EventData::MappingEnd`].
    MappingStart,
    MappingEnd,

    /// The start of a sequence, either block or flow style. Always
    /// closed by a matching [`EventData::SequenceEnd`].
    SequenceStart(SequenceStyle),
    SequenceEnd,

    /// A plain scalar: a mapping key, a mapping value, or a sequence
    /// element.
    Scalar(Slice<'de>),

    /// The start of a `|` literal block scalar.
    BlockScalarStart,
    /// One line of a block scalar's content, with the header's indent
    /// plus two spaces already stripped. Concatenating every
    /// [`EventData::BlockScalarLine`] between a
    /// [`EventData::BlockScalarStart`]/[`EventData::BlockScalarEnd`]
    /// pair with `\n` reproduces the scalar's content verbatim.
    BlockScalarLine(Slice<'de>),
    BlockScalarEnd,

    /// A comment's text, with the leading `# ` already stripped. Emitted
    /// for both full-line comments and comments trailing a scalar value
    /// (in which case it immediately follows that value's
    /// [`EventData::Scalar`] event, on the same line).
    Comment(Slice<'de>),
}
