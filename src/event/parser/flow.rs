/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The flow sequence sub-parser.
//!
//! A flow sequence (`[a,b,[c,d]]`) is whitespace-free and confined to a
//! single physical line, so unlike the block-literal sub-machine it needs
//! no state across [`super::Parser::next_event`] calls: the whole
//! bracketed expression is parsed eagerly, in one shot, directly into the
//! pending event queue.

use std::ops::Range;

use crate::{
    error::internal::ErrorCode,
    event::types::{Event, EventData, Slice, SequenceStyle},
};

/// One structural step found while scanning a flow sequence, expressed
/// as a byte range into the original value so the caller can slice it
/// out of whichever [`std::borrow::Cow`] variant the line happened to
/// be, without requiring the scan itself to hold a `'de`-tied `&str`.
enum Item
{
    SequenceStart,
    SequenceEnd,
    Element(Range<usize>),
}

/// Parse a flow sequence starting at `value.as_bytes()[0] == b'['`, and
/// push the resulting events onto `out`.
///
/// `depth_budget` is the number of nesting levels still available before
/// [`ErrorCode::NestingTooDeep`] fires; it accounts for however deep the
/// enclosing block containers already are, so the overall nesting limit
/// is shared between block and flow containers.
pub(crate) fn parse<'de>(
    line: u64,
    value: &Slice<'de>,
    depth_budget: usize,
    out: &mut Vec<Event<'de>>,
) -> Result<(), ErrorCode>
{
    let view: &str = value.as_ref();

    debug_assert_eq!(view.as_bytes().first(), Some(&b'['));

    if view.contains(' ')
    {
        return Err(ErrorCode::FlowWhitespace);
    }

    let mut items = Vec::new();
    let mut pos = 0usize;

    scan_sequence(view, &mut pos, 0, depth_budget, &mut items)?;

    if pos != view.len()
    {
        return Err(ErrorCode::FlowTrailingChars);
    }

    for item in items
    {
        let data = match item
        {
            Item::SequenceStart => EventData::SequenceStart(SequenceStyle::Flow),
            Item::SequenceEnd => EventData::SequenceEnd,
            Item::Element(range) => EventData::Scalar(super::slice_range(value, range)),
        };

        out.push(Event::new(line, data));
    }

    Ok(())
}

fn scan_sequence(
    s: &str,
    pos: &mut usize,
    depth: usize,
    budget: usize,
    out: &mut Vec<Item>,
) -> Result<(), ErrorCode>
{
    if depth >= budget
    {
        return Err(ErrorCode::NestingTooDeep);
    }

    debug_assert_eq!(s.as_bytes()[*pos], b'[');
    *pos += 1;
    out.push(Item::SequenceStart);

    let bytes = s.as_bytes();
    let mut expect_element = true;
    let mut seen_element = false;

    loop
    {
        match bytes.get(*pos)
        {
            None => return Err(ErrorCode::FlowUnterminated),

            Some(b']') if expect_element && seen_element =>
            {
                return Err(ErrorCode::FlowTrailingComma)
            },

            Some(b']') =>
            {
                *pos += 1;
                out.push(Item::SequenceEnd);

                return Ok(());
            },

            Some(b',') if expect_element => return Err(ErrorCode::FlowEmptyElement),

            Some(b',') =>
            {
                *pos += 1;
                expect_element = true;
            },

            Some(b'[') if !expect_element => return Err(ErrorCode::FlowTrailingChars),

            Some(b'[') =>
            {
                scan_sequence(s, pos, depth + 1, budget, out)?;
                expect_element = false;
                seen_element = true;
            },

            Some(_) if !expect_element => return Err(ErrorCode::FlowTrailingChars),

            Some(_) =>
            {
                use crate::lexer::MAX_FLOW_ELEM_LEN;

                let start = *pos;

                while !matches!(bytes.get(*pos), None | Some(b',') | Some(b']') | Some(b'['))
                {
                    *pos += 1;
                }

                if *pos == start
                {
                    return Err(ErrorCode::FlowEmptyElement);
                }

                if *pos - start > MAX_FLOW_ELEM_LEN
                {
                    return Err(ErrorCode::FlowElementTooLong);
                }

                out.push(Item::Element(start..*pos));
                expect_element = false;
                seen_element = true;
            },
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::borrow::Cow;

    use super::*;

    fn run(value: &str) -> Result<Vec<Event<'_>>, ErrorCode>
    {
        let mut out = Vec::new();
        let cow = Cow::Borrowed(value);

        parse(1, &cow, 32, &mut out)?;

        Ok(out)
    }

    #[test]
    fn flat_sequence() -> Result<(), ErrorCode>
    {
        let out = run("[a,b,c]")?;

        assert_eq!(out.len(), 5);
        assert_eq!(out[0].data, EventData::SequenceStart(SequenceStyle::Flow));
        assert_eq!(out[1].data, EventData::Scalar(Cow::Borrowed("a")));
        assert_eq!(out[4].data, EventData::SequenceEnd);

        Ok(())
    }

    #[test]
    fn nested_sequence() -> Result<(), ErrorCode>
    {
        let out = run("[read,write,[admin,root]]")?;

        assert_eq!(
            out.iter().map(|e| &e.data).collect::<Vec<_>>(),
            vec![
                &EventData::SequenceStart(SequenceStyle::Flow),
                &EventData::Scalar(Cow::Borrowed("read")),
                &EventData::Scalar(Cow::Borrowed("write")),
                &EventData::SequenceStart(SequenceStyle::Flow),
                &EventData::Scalar(Cow::Borrowed("admin")),
                &EventData::Scalar(Cow::Borrowed("root")),
                &EventData::SequenceEnd,
                &EventData::SequenceEnd,
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_sequence_is_legal()
    {
        assert!(run("[]").is_ok());
    }

    #[test]
    fn trailing_comma_is_an_error()
    {
        assert_eq!(run("[a,]"), Err(ErrorCode::FlowTrailingComma));
    }

    #[test]
    fn empty_element_is_an_error()
    {
        assert_eq!(run("[a,,b]"), Err(ErrorCode::FlowEmptyElement));
        assert_eq!(run("[,a]"), Err(ErrorCode::FlowEmptyElement));
    }

    #[test]
    fn unterminated_is_an_error()
    {
        assert_eq!(run("[a,b"), Err(ErrorCode::FlowUnterminated));
    }

    #[test]
    fn trailing_characters_are_an_error()
    {
        let mut out = Vec::new();
        let cow = Cow::Borrowed("[a][b]");

        assert_eq!(parse(1, &cow, 32, &mut out), Err(ErrorCode::FlowTrailingChars));
    }

    #[test]
    fn whitespace_is_rejected()
    {
        assert_eq!(run("[a, b]"), Err(ErrorCode::FlowWhitespace));
    }

    #[test]
    fn depth_budget_is_enforced()
    {
        assert!(run("[[[x]]]").is_ok());

        let mut out = Vec::new();
        let cow = Cow::Borrowed("[[x]]");

        assert_eq!(parse(1, &cow, 1, &mut out), Err(ErrorCode::NestingTooDeep));
    }
}
