/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes the [`Parser`] struct and related types. The
//! Parser pulls physical lines out of a [`Read`] source and turns them
//! into the [`Event`] stream documented in [`crate::event`].
//!
//! ## Invoking the Parser
//!
//! The two interesting methods on a [`Parser`] are:
//!
//! 1. [`next_event`](Parser::next_event)
//! 2. the [`IntoIterator`] impl, for hooking into the `Iterator`
//!    ecosystem directly
//!
//! A [`Parser`] is built over a borrowed [`Read`]er, so the same reader
//! can be reused across parsers (for example, to parse the same text
//! twice with different [`Options`]).
//!
//! Once [`next_event`](Parser::next_event) returns `Some(Err(_))`, the
//! error is latched: the parser will yield exactly one more event
//! ([`EventData::StreamEnd`]) and then `None` forever after.

mod block;
mod flow;

use std::{borrow::Cow, collections::VecDeque, ops::Range};

use crate::{
    error::internal::{Error as InternalError, ErrorCode, ErrorKind},
    event::{
        state::{BlockState, ContainerKind, Containers, Mode},
        types::{Event, EventData, SequenceStyle, Slice},
    },
    lexer::{comment, guard, indent, indent::Shape, key, separator},
    reader::Read,
};

/// Configuration accepted by [`Parser::with_options`].
///
/// The [`Default`] impl matches [`Parser::new`]'s behavior.
#[derive(Debug, Clone, Copy)]
pub struct Options
{
    /// Reject a mapping that repeats a key. Enabled by default; disabling
    /// it trades a correctness check for the ability to parse documents
    /// that rely on "last key wins" semantics.
    pub duplicate_keys: bool,

    /// Reserved for a future looser grammar variant that accepts a bare
    /// mapping with no explicit document separator. Not yet implemented;
    /// always rejected regardless of this flag's value.
    pub compat_singleton: bool,
}

impl Default for Options
{
    fn default() -> Self
    {
        Self {
            duplicate_keys:   true,
            compat_singleton: false,
        }
    }
}

/// A capability object for observing parser-internal state transitions,
/// independent of the [`Event`] stream itself.
///
/// Intended for diagnostics: an embedder who wants line-level detail
/// without pulling in a full `tracing` subscriber can implement this
/// directly.
pub trait Trace: std::fmt::Debug
{
    fn note(&self, line: u64, message: &str);
}

/// Pull parser over a [`Read`] source, producing [`Event`]s.
#[derive(Debug)]
pub struct Parser<'de, 't, R>
{
    reader:  &'de R,
    options: Options,
    trace:   Option<&'t dyn Trace>,

    containers:     Containers,
    mode:           Mode,
    pending_header: Option<PendingHeader>,
    pending:        VecDeque<Event<'de>>,

    line_no:          u64,
    stream_started:   bool,
    doc_open:         bool,
    awaiting_document: bool,
    ever_opened:      bool,
    done:             bool,
    latched_error:    Option<crate::Error>,
}

/// A mapping key or sequence entry seen with no inline value, whose
/// nested-block-or-error resolution must wait for the next line.
#[derive(Debug)]
struct PendingHeader
{
    child_indent: usize,
    parent_kind:  ContainerKind,
}

impl<'de, 't, R> Parser<'de, 't, R>
where
    R: Read,
{
    /// Build a parser over `reader` using the default [`Options`].
    pub fn new(reader: &'de R) -> Self
    {
        Self::with_options(reader, Options::default())
    }

    /// Build a parser over `reader` using custom [`Options`].
    pub fn with_options(reader: &'de R, options: Options) -> Self
    {
        Self {
            reader,
            options,
            trace: None,
            containers: Containers::default(),
            mode: Mode::Normal,
            pending_header: None,
            pending: VecDeque::new(),
            line_no: 0,
            stream_started: false,
            doc_open: false,
            awaiting_document: false,
            ever_opened: false,
            done: false,
            latched_error: None,
        }
    }

    /// Attach a [`Trace`] sink to this parser.
    pub fn with_trace(mut self, trace: &'t dyn Trace) -> Self
    {
        self.trace = Some(trace);
        self
    }

    /// Pull the next [`Event`] out of the stream.
    ///
    /// Returns `None` once [`EventData::StreamEnd`] has already been
    /// produced.
    pub fn next_event(&mut self) -> Option<crate::Result<Event<'de>>>
    {
        loop
        {
            if let Some(ev) = self.pending.pop_front()
            {
                if matches!(ev.data, EventData::StreamEnd)
                {
                    self.done = true;
                }

                return Some(Ok(ev));
            }

            if self.done
            {
                return None;
            }

            if let Some(err) = self.latched_error.take()
            {
                self.pending
                    .push_back(Event::new(self.line_no, EventData::StreamEnd));

                return Some(Err(err));
            }

            self.step();
        }
    }

    fn trace(&self, message: &str)
    {
        if let Some(t) = self.trace
        {
            t.note(self.line_no, message);
        }
    }

    fn fail<E>(&mut self, err: E, column: u64)
    where
        E: Into<ErrorKind>,
    {
        let internal = InternalError::with_context(err, self.line_no, column);

        self.trace("latching error");
        self.latched_error = Some(internal.into());
    }

    /// Drive the state machine forward until at least one event has been
    /// queued, or the stream is fully consumed.
    fn step(&mut self)
    {
        if !self.stream_started
        {
            self.stream_started = true;
            self.pending.push_back(Event::new(0, EventData::StreamStart));

            return;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Normal);

        match self.reader.pull()
        {
            Err(e) =>
            {
                self.mode = mode;
                self.fail(e, 0);
            },

            Ok(None) =>
            {
                self.mode = mode;
                self.handle_eof();
            },

            Ok(Some(mut raw)) =>
            {
                self.line_no += 1;

                if self.line_no == 1
                {
                    let (stripped, bom_err) = strip_bom(raw);

                    raw = stripped;

                    if let Some(code) = bom_err
                    {
                        self.mode = mode;
                        self.fail(code, 0);

                        return;
                    }
                }

                match mode
                {
                    Mode::Normal => self.process_normal_line(raw),
                    Mode::Block(state) => self.process_block_line(state, raw),
                }
            },
        }
    }

    fn handle_eof(&mut self)
    {
        if let Mode::Block(state) = &self.mode
        {
            if let Err(code) = block::finalize_at_eof(state)
            {
                self.fail(code, 0);

                return;
            }

            self.pending
                .push_back(Event::new(self.line_no, EventData::BlockScalarEnd));
            self.mode = Mode::Normal;
        }

        if let Some(pending) = self.pending_header.take()
        {
            self.fail(header_error(pending.parent_kind), 0);

            return;
        }

        if !self.doc_open
        {
            if self.awaiting_document
            {
                self.fail(ErrorCode::SeparatorAfterDoc, 0);

                return;
            }

            if !self.ever_opened
            {
                self.fail(ErrorCode::DocumentScalarRoot, 0);

                return;
            }
        }

        self.close_all();
        self.pending
            .push_back(Event::new(self.line_no, EventData::StreamEnd));
    }

    /// Open the document: push `DocumentStart`, mark it as open, and
    /// clear whatever "awaiting a new document" state a prior `---` left
    /// behind.
    fn open_document(&mut self)
    {
        self.pending
            .push_back(Event::new(self.line_no, EventData::DocumentStart));
        self.doc_open = true;
        self.awaiting_document = false;
        self.ever_opened = true;
    }

    /// Pop every open container, closing the current document if one is
    /// open.
    fn close_all(&mut self)
    {
        while let Some(frame) = self.containers.pop()
        {
            self.pending
                .push_back(Event::new(self.line_no, end_event(frame.kind)));
        }

        if self.doc_open
        {
            self.pending
                .push_back(Event::new(self.line_no, EventData::DocumentEnd));
            self.doc_open = false;
        }
    }

    fn process_block_line(&mut self, mut state: BlockState, raw: Slice<'de>)
    {
        match block::feed(&mut state, raw.clone(), self.line_no)
        {
            Err(code) => self.fail(code, 0),

            Ok(block::Line::Blank) =>
            {
                self.mode = Mode::Block(state);
            },

            Ok(block::Line::Content { flush_blanks, text }) =>
            {
                if let Some((first_line, count)) = flush_blanks
                {
                    for i in 0..count
                    {
                        self.pending.push_back(Event::new(
                            first_line + i,
                            EventData::BlockScalarLine(Cow::Borrowed("")),
                        ));
                    }
                }

                self.pending
                    .push_back(Event::new(self.line_no, EventData::BlockScalarLine(text)));
                self.mode = Mode::Block(state);
            },

            Ok(block::Line::End) =>
            {
                self.pending
                    .push_back(Event::new(self.line_no, EventData::BlockScalarEnd));
                self.mode = Mode::Normal;
                self.process_normal_line(raw);
            },
        }
    }

    fn process_normal_line(&mut self, raw: Slice<'de>)
    {
        let view: &str = raw.as_ref();

        if let Err(code) = guard::check(view)
        {
            self.fail(code, 0);

            return;
        }

        let (indent, rest) = match indent::compute(view)
        {
            Err(code) =>
            {
                self.fail(code, 0);

                return;
            },

            Ok(Shape::Blank) => return,

            Ok(Shape::Content { indent, rest }) => (indent, rest),
        };

        if rest.starts_with('#')
        {
            match comment::full_line(rest)
            {
                Err(code) => self.fail(code, 0),

                Ok(text) => self.process_comment_line(&raw, view, indent, text),
            }

            return;
        }

        match separator::check(rest)
        {
            Err(code) =>
            {
                self.fail(code, 0);
            },

            Ok(true) => self.process_separator(indent),

            Ok(false) => self.process_structural_line(&raw, view, indent, rest),
        }
    }

    fn process_separator(&mut self, indent: usize)
    {
        if indent != 0
        {
            self.fail(ErrorCode::SeparatorIndent, 0);

            return;
        }

        if let Some(pending) = self.pending_header.take()
        {
            self.fail(header_error(pending.parent_kind), 0);

            return;
        }

        if !self.doc_open
        {
            self.fail(ErrorCode::SeparatorAfterDoc, 0);

            return;
        }

        self.close_all();
        self.awaiting_document = true;
    }

    /// A full-line comment. Its indent must match either an open
    /// container's or a still-unresolved pending header's child indent;
    /// a lower indent first closes frames down to the matching one.
    /// Unlike a structural line, a comment never resolves a pending
    /// header — it is left exactly as it was for the next structural
    /// line to settle.
    fn process_comment_line(&mut self, raw: &Slice<'de>, view: &str, indent: usize, text: &str)
    {
        let pending_matches = matches!(&self.pending_header, Some(p) if p.child_indent == indent);

        if !pending_matches
        {
            if self.containers.is_empty()
            {
                if indent != 0
                {
                    self.fail(ErrorCode::CommentIndent, 0);

                    return;
                }
            }
            else
            {
                let top_indent = self.containers.top().expect("checked non-empty above").indent;

                if indent > top_indent
                {
                    self.fail(ErrorCode::CommentIndent, 0);

                    return;
                }

                while self.containers.top().map_or(false, |f| f.indent > indent)
                {
                    let frame = self.containers.pop().expect("loop condition checked Some");

                    self.pending
                        .push_back(Event::new(self.line_no, end_event(frame.kind)));
                }

                let matches_frame = self.containers.top().map_or(indent == 0, |f| f.indent == indent);

                if !matches_frame
                {
                    self.fail(ErrorCode::CommentIndent, 0);

                    return;
                }
            }
        }

        if !self.doc_open
        {
            self.open_document();
        }

        let ev = to_slice(raw, view, text);

        self.pending
            .push_back(Event::new(self.line_no, EventData::Comment(ev)));
    }

    fn process_structural_line(&mut self, raw: &Slice<'de>, view: &str, indent: usize, rest: &str)
    {
        let at_root = self.pending_header.is_none() && self.containers.is_empty();

        if let Some(pending) = self.pending_header.take()
        {
            if indent != pending.child_indent
            {
                self.fail(header_error(pending.parent_kind), 0);

                return;
            }
        }
        else if self.containers.is_empty()
        {
            if indent != 0
            {
                self.fail(ErrorCode::IndentWrong, 0);

                return;
            }
        }
        else
        {
            let top_indent = self.containers.top().expect("checked non-empty above").indent;

            if indent > top_indent
            {
                self.fail(ErrorCode::IndentWrong, 0);

                return;
            }

            while self.containers.top().map_or(false, |f| f.indent > indent)
            {
                let frame = self.containers.pop().expect("loop condition checked Some");

                self.pending
                    .push_back(Event::new(self.line_no, end_event(frame.kind)));
            }
        }

        let kind = match classify(rest, at_root)
        {
            Err(code) =>
            {
                self.fail(code, 0);

                return;
            },

            Ok(kind) => kind,
        };

        if !self.doc_open
        {
            self.open_document();
        }

        let need_new_frame = match self.containers.top()
        {
            None => true,
            Some(frame) => frame.indent < indent,
        };

        let container_kind = match &kind
        {
            LineKind::Sequence { .. } => ContainerKind::Sequence,
            LineKind::Mapping { .. } => ContainerKind::Mapping,
        };

        if need_new_frame
        {
            if let Err(code) = self.containers.push(container_kind, indent)
            {
                self.fail(code, 0);

                return;
            }

            self.pending
                .push_back(Event::new(self.line_no, start_event(container_kind)));
        }
        else
        {
            let top_kind = self.containers.top().expect("frame exists").kind;

            if top_kind != container_kind
            {
                self.fail(ErrorCode::NodeKindMix, 0);

                return;
            }
        }

        match kind
        {
            LineKind::Sequence { value } => self.emit_sequence_entry(raw, view, indent, value),
            LineKind::Mapping { key: key_text, value } =>
            {
                self.emit_mapping_entry(raw, view, indent, key_text, value)
            },
        }
    }

    fn emit_sequence_entry(
        &mut self,
        raw: &Slice<'de>,
        view: &str,
        indent: usize,
        value: Option<SequenceValue<'_>>,
    )
    {
        match value
        {
            None =>
            {
                self.pending_header = Some(PendingHeader {
                    child_indent: indent + 2,
                    parent_kind:  ContainerKind::Sequence,
                });
            },

            Some(SequenceValue::Scalar(value)) => self.emit_value(raw, view, indent, value),

            Some(SequenceValue::Mapping { key, value }) =>
            {
                self.emit_compact_mapping(raw, view, indent, key, value)
            },
        }
    }

    /// `- KEY: V` / `- KEY:`: a sequence entry that is itself a
    /// single-entry mapping, opening a nested [`ContainerKind::Mapping`]
    /// frame one nesting level below the dash, exactly as a normal
    /// mapping entry would.
    fn emit_compact_mapping(
        &mut self,
        raw: &Slice<'de>,
        view: &str,
        indent: usize,
        key_text: &str,
        value: Option<&str>,
    )
    {
        let child_indent = indent + 2;

        if let Err(code) = self.containers.push(ContainerKind::Mapping, child_indent)
        {
            self.fail(code, 0);

            return;
        }

        self.pending
            .push_back(Event::new(self.line_no, EventData::MappingStart));

        self.emit_mapping_entry(raw, view, child_indent, key_text, value);
    }

    fn emit_mapping_entry(
        &mut self,
        raw: &Slice<'de>,
        view: &str,
        indent: usize,
        key_text: &str,
        value: Option<&str>,
    )
    {
        if let Err(code) = key::validate(key_text)
        {
            self.fail(code, 0);

            return;
        }

        if self.options.duplicate_keys
        {
            let frame = self.containers.top_mut().expect("mapping frame just ensured");

            if let Err(code) = frame.observe_key(key_text)
            {
                self.fail(code, 0);

                return;
            }
        }

        let key_slice = to_slice(raw, view, key_text);

        self.pending
            .push_back(Event::new(self.line_no, EventData::Scalar(key_slice)));

        match value
        {
            None =>
            {
                self.pending_header = Some(PendingHeader {
                    child_indent: indent + 2,
                    parent_kind:  ContainerKind::Mapping,
                });
            },

            Some(value) => self.emit_value(raw, view, indent, value),
        }
    }

    fn emit_value(&mut self, raw: &Slice<'de>, view: &str, indent: usize, value: &str)
    {
        if value == "|"
        {
            self.pending
                .push_back(Event::new(self.line_no, EventData::BlockScalarStart));
            self.mode = Mode::Block(BlockState::new(indent));

            return;
        }

        if value.starts_with('[')
        {
            let value_slice = to_slice(raw, view, value);
            let depth_budget = crate::lexer::MAX_DEPTH.saturating_sub(self.containers.depth());
            let mut events = Vec::new();

            match flow::parse(self.line_no, &value_slice, depth_budget, &mut events)
            {
                Err(code) => self.fail(code, 0),
                Ok(()) => self.pending.extend(events),
            }

            return;
        }

        match comment::split_inline(value)
        {
            Err(code) => self.fail(code, 0),

            Ok((scalar, comment_info)) =>
            {
                let scalar_slice = to_slice(raw, view, scalar);

                self.pending
                    .push_back(Event::new(self.line_no, EventData::Scalar(scalar_slice)));

                if let Some((text, _align)) = comment_info
                {
                    let comment_slice = to_slice(raw, view, text);

                    self.pending
                        .push_back(Event::new(self.line_no, EventData::Comment(comment_slice)));
                }
            },
        }
    }
}

fn header_error(parent: ContainerKind) -> ErrorCode
{
    match parent
    {
        ContainerKind::Mapping => ErrorCode::HeaderMapNoNested,
        ContainerKind::Sequence => ErrorCode::HeaderSeqNoNested,
    }
}

fn start_event(kind: ContainerKind) -> EventData<'static>
{
    match kind
    {
        ContainerKind::Mapping => EventData::MappingStart,
        ContainerKind::Sequence => EventData::SequenceStart(SequenceStyle::Block),
    }
}

fn end_event(kind: ContainerKind) -> EventData<'static>
{
    match kind
    {
        ContainerKind::Mapping => EventData::MappingEnd,
        ContainerKind::Sequence => EventData::SequenceEnd,
    }
}

impl<'de, 't, R> IntoIterator for Parser<'de, 't, R>
where
    R: Read,
{
    type IntoIter = EventIter<'de, 't, R>;
    type Item = crate::Result<Event<'de>>;

    fn into_iter(self) -> Self::IntoIter
    {
        EventIter(self)
    }
}

/// [`Iterator`] adapter over a [`Parser`], yielded by its
/// [`IntoIterator`] impl.
#[derive(Debug)]
pub struct EventIter<'de, 't, R>(Parser<'de, 't, R>);

impl<'de, 't, R> Iterator for EventIter<'de, 't, R>
where
    R: Read,
{
    type Item = crate::Result<Event<'de>>;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.0.next_event()
    }
}

/// Shape of a normal-mode line once its leading marker has been
/// recognized, with the deferred-value case represented as `value: None`.
enum LineKind<'a>
{
    Sequence
    {
        value: Option<SequenceValue<'a>>
    },
    Mapping
    {
        key: &'a str, value: Option<&'a str>
    },
}

/// The value half of a sequence entry: a plain scalar, or a compact
/// `KEY: V` mapping opening its own nested frame.
enum SequenceValue<'a>
{
    Scalar(&'a str),
    Mapping
    {
        key: &'a str, value: Option<&'a str>
    },
}

/// Classify `rest` (indentation already stripped, known not to be a
/// comment or document separator) into a [`LineKind`].
///
/// `at_root` is true when no container is open and no header is
/// pending — i.e. `rest` would be a document's root node — so a bare
/// scalar here is `DocumentScalarRoot` rather than the generic
/// `KeyIllegal` a malformed nested line gets.
fn classify(rest: &str, at_root: bool) -> Result<LineKind<'_>, ErrorCode>
{
    if rest == "-"
    {
        return Ok(LineKind::Sequence { value: None });
    }

    if let Some(v) = rest.strip_prefix("- ")
    {
        let value = if v.is_empty() { None } else { Some(classify_sequence_value(v)?) };

        return Ok(LineKind::Sequence { value });
    }

    if rest.starts_with('-')
    {
        return Err(ErrorCode::ValueSpacing);
    }

    match rest.find(':')
    {
        None => Err(if at_root { ErrorCode::DocumentScalarRoot } else { ErrorCode::KeyIllegal }),

        Some(_) =>
        {
            let (key_text, value) = classify_mapping(rest)?;

            Ok(LineKind::Mapping { key: key_text, value })
        },
    }
}

/// Split `rest` (known to contain a `:`) into a key/value pair, the
/// same rule a top-level mapping entry uses: the colon must be followed
/// by exactly one space then a non-empty value, or by end-of-line.
fn classify_mapping(rest: &str) -> Result<(&str, Option<&str>), ErrorCode>
{
    let colon = rest.find(':').expect("caller confirmed a colon is present");
    let key_text = &rest[..colon];
    let value_part = &rest[colon + 1..];

    if value_part.is_empty()
    {
        return Ok((key_text, None));
    }

    let v = value_part.strip_prefix(' ').ok_or(ErrorCode::ValueSpacing)?;

    Ok((key_text, if v.is_empty() { None } else { Some(v) }))
}

/// Classify a sequence entry's stripped value `v` as a plain scalar or a
/// compact `KEY: V` mapping.
fn classify_sequence_value(v: &str) -> Result<SequenceValue<'_>, ErrorCode>
{
    if !looks_like_mapping_entry(v)
    {
        return Ok(SequenceValue::Scalar(v));
    }

    let (key, value) = classify_mapping(v)?;

    Ok(SequenceValue::Mapping { key, value })
}

/// Sniff whether `v` opens with a `KEY:` shape worth treating as a
/// compact mapping, rather than a scalar that merely happens to contain
/// a `:` (a URL, a timestamp, ...). A real key atom starts with a
/// letter or underscore, and its colon is immediately followed by a
/// space or end-of-line — the same shape [`classify_mapping`] accepts.
fn looks_like_mapping_entry(v: &str) -> bool
{
    let colon = match v.find(':')
    {
        Some(pos) => pos,
        None => return false,
    };

    let starts_like_key = v[..colon]
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_');

    if !starts_like_key
    {
        return false;
    }

    matches!(v.as_bytes().get(colon + 1), None | Some(b' '))
}

/// Strip a leading byte order mark from the stream's very first line,
/// preserving whichever [`Cow`] variant `raw` already was.
fn strip_bom(raw: Slice<'_>) -> (Slice<'_>, Option<ErrorCode>)
{
    match raw
    {
        Cow::Borrowed(s) =>
        {
            let (stripped, err) = guard::strip_bom(s);

            (Cow::Borrowed(stripped), err)
        },

        Cow::Owned(s) => match s.strip_prefix(crate::lexer::BOM)
        {
            Some(stripped) => (Cow::Owned(stripped.to_owned()), Some(ErrorCode::Bom)),
            None => (Cow::Owned(s), None),
        },
    }
}

/// The byte offset of `inner` within `outer`, given `inner` is (as it
/// always is here) a sub-slice of `outer`'s own backing bytes.
fn offset_of(outer: &str, inner: &str) -> usize
{
    inner.as_ptr() as usize - outer.as_ptr() as usize
}

/// Re-slice `raw` by a byte range, preserving whichever [`Cow`] variant
/// it already was: zero-copy for a borrowed line, a fresh allocation for
/// an owned one.
pub(crate) fn slice_range<'de>(raw: &Slice<'de>, range: Range<usize>) -> Slice<'de>
{
    match raw
    {
        Cow::Borrowed(s) => Cow::Borrowed(&s[range]),
        Cow::Owned(s) => Cow::Owned(s[range].to_owned()),
    }
}

/// Convert a transient `&str` borrowed from `view` (itself `raw.as_ref()`)
/// back into a properly `'de`-respecting slice of `raw`.
fn to_slice<'de>(raw: &Slice<'de>, view: &str, inner: &str) -> Slice<'de>
{
    let start = offset_of(view, inner);

    slice_range(raw, start..start + inner.len())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::reader::borrow::BorrowReader;

    fn events(doc: &str) -> Vec<EventData<'_>>
    {
        let reader = BorrowReader::new(doc);
        let parser = Parser::new(&reader);

        parser
            .into_iter()
            .map(|r| r.expect("document parses without error").data)
            .collect()
    }

    fn try_events(doc: &str) -> crate::Result<Vec<EventData<'_>>>
    {
        let reader = BorrowReader::new(doc);
        let parser = Parser::new(&reader);
        let mut out = Vec::new();

        for ev in parser.into_iter()
        {
            out.push(ev?.data);
        }

        Ok(out)
    }

    #[test]
    fn flat_mapping()
    {
        let doc = "name: demo\nport: 8080\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("name")),
                EventData::Scalar(Cow::Borrowed("demo")),
                EventData::Scalar(Cow::Borrowed("port")),
                EventData::Scalar(Cow::Borrowed("8080")),
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn nested_mapping()
    {
        let doc = "server:\n  host: localhost\n  port: 8080\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("server")),
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("host")),
                EventData::Scalar(Cow::Borrowed("localhost")),
                EventData::Scalar(Cow::Borrowed("port")),
                EventData::Scalar(Cow::Borrowed("8080")),
                EventData::MappingEnd,
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn block_sequence_of_mappings()
    {
        let doc = "servers:\n  - name: a\n    port: 1\n  - name: b\n    port: 2\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("servers")),
                EventData::SequenceStart(SequenceStyle::Block),
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("name")),
                EventData::Scalar(Cow::Borrowed("a")),
                EventData::Scalar(Cow::Borrowed("port")),
                EventData::Scalar(Cow::Borrowed("1")),
                EventData::MappingEnd,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("name")),
                EventData::Scalar(Cow::Borrowed("b")),
                EventData::Scalar(Cow::Borrowed("port")),
                EventData::Scalar(Cow::Borrowed("2")),
                EventData::MappingEnd,
                EventData::SequenceEnd,
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn flow_sequence_value()
    {
        let doc = "roles: [admin,write,read]\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("roles")),
                EventData::SequenceStart(SequenceStyle::Flow),
                EventData::Scalar(Cow::Borrowed("admin")),
                EventData::Scalar(Cow::Borrowed("write")),
                EventData::Scalar(Cow::Borrowed("read")),
                EventData::SequenceEnd,
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn block_scalar_value()
    {
        let doc = "script: |\n  echo hi\n  echo bye\nnext: ok\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("script")),
                EventData::BlockScalarStart,
                EventData::BlockScalarLine(Cow::Borrowed("echo hi")),
                EventData::BlockScalarLine(Cow::Borrowed("echo bye")),
                EventData::BlockScalarEnd,
                EventData::Scalar(Cow::Borrowed("next")),
                EventData::Scalar(Cow::Borrowed("ok")),
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn multiple_documents()
    {
        let doc = "a: 1\n---\nb: 2\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("a")),
                EventData::Scalar(Cow::Borrowed("1")),
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::DocumentStart,
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("b")),
                EventData::Scalar(Cow::Borrowed("2")),
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn full_line_and_inline_comments()
    {
        let doc = "# header\nname: demo # trailing\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::Comment(Cow::Borrowed("header")),
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("name")),
                EventData::Scalar(Cow::Borrowed("demo")),
                EventData::Comment(Cow::Borrowed("trailing")),
                EventData::MappingEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn header_with_no_nested_block_is_an_error()
    {
        let err = try_events("key:\nnext: 1\n").unwrap_err();

        assert_eq!(err.classify(), crate::Category::Syntax);
    }

    #[test]
    fn duplicate_key_is_rejected()
    {
        let err = try_events("a: 1\na: 2\n").unwrap_err();

        assert_eq!(err.classify(), crate::Category::Syntax);
    }

    #[test]
    fn bare_scalar_document_root_is_rejected()
    {
        let err = try_events("just a scalar\n").unwrap_err();

        assert_eq!(err.classify(), crate::Category::Syntax);
    }

    #[test]
    fn compact_mapping_in_sequence()
    {
        let doc = "- name: a\n  port: 1\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::SequenceStart(SequenceStyle::Block),
                EventData::MappingStart,
                EventData::Scalar(Cow::Borrowed("name")),
                EventData::Scalar(Cow::Borrowed("a")),
                EventData::Scalar(Cow::Borrowed("port")),
                EventData::Scalar(Cow::Borrowed("1")),
                EventData::MappingEnd,
                EventData::SequenceEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn compact_mapping_header_with_no_nested_block_is_an_error()
    {
        assert!(try_events("- name:\nnext: 1\n").is_err());
    }

    #[test]
    fn sequence_scalar_with_colon_is_not_mistaken_for_a_mapping()
    {
        let doc = "- http://example.com\n";
        let evs = events(doc);

        assert_eq!(
            evs,
            vec![
                EventData::StreamStart,
                EventData::DocumentStart,
                EventData::SequenceStart(SequenceStyle::Block),
                EventData::Scalar(Cow::Borrowed("http://example.com")),
                EventData::SequenceEnd,
                EventData::DocumentEnd,
                EventData::StreamEnd,
            ]
        );
    }

    #[test]
    fn separator_before_first_document_is_rejected()
    {
        assert!(try_events("---\na: 1\n").is_err());
    }

    #[test]
    fn trailing_separator_at_eof_is_rejected()
    {
        let err = try_events("a: 1\n---\n").unwrap_err();

        assert_eq!(err.classify(), crate::Category::Syntax);
    }

    #[test]
    fn comment_at_mismatched_indent_is_rejected()
    {
        assert!(try_events("a:\n  b: 1\n # c\n").is_err());
    }

    #[test]
    fn mixed_node_kinds_at_one_indent_are_rejected()
    {
        assert!(try_events("a: 1\n- b\n").is_err());
    }

    #[test]
    fn after_error_stream_end_is_the_last_event()
    {
        let reader = BorrowReader::new("key:\nnext: 1\n");
        let parser = Parser::new(&reader);
        let events: Vec<_> = parser.into_iter().collect();

        assert!(events[events.len() - 2].is_err());
        assert!(matches!(
            events.last().unwrap().as_ref().unwrap().data,
            EventData::StreamEnd
        ));
    }
}
