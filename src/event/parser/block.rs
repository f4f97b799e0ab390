/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The block-literal sub-machine.
//!
//! Unlike a flow sequence, a `|` block scalar's content spans multiple
//! physical lines, so its state — the header's indent, whether any
//! content has been emitted yet, and any run of blank lines whose
//! disposition can't be decided until the following line arrives — must
//! survive across [`super::Parser::next_event`] calls. That state lives
//! in [`crate::event::state::BlockState`]; this module only contains the
//! pure per-line decision logic that state drives.

use std::borrow::Cow;

use crate::{error::internal::ErrorCode, event::state::BlockState, lexer::MAX_BLOCK_LINE_LEN};

/// The effect one physical line has on an in-progress block literal.
pub(crate) enum Line<'de>
{
    /// A blank line was absorbed into the pending run; no content to
    /// emit yet.
    Blank,
    /// One content line, with the header's indent plus two spaces
    /// already stripped. Any pending blank run should be flushed as
    /// empty lines before this one.
    Content
    {
        flush_blanks: Option<(u64, u64)>, text: Cow<'de, str>
    },
    /// The block ended: this line's indent fell below the block's
    /// content indent, or it was the first line and already blank. The
    /// line itself was not consumed and must be reprocessed under normal
    /// line dispatch; `None` here means the block simply ran out of
    /// input (the caller is at EOF).
    End,
}

/// Guard a block literal's content line: length and carriage-return only
/// — tabs are permitted inside block literal bodies, and indentation is
/// not required to be even.
fn guard(line: &str) -> Result<(), ErrorCode>
{
    if line.len() > MAX_BLOCK_LINE_LEN
    {
        return Err(ErrorCode::BlockLineTooLong);
    }

    if line.contains('\r')
    {
        return Err(ErrorCode::CarriageReturn);
    }

    Ok(())
}

fn strip_indent(raw: Cow<'_, str>, n: usize) -> Cow<'_, str>
{
    match raw
    {
        Cow::Borrowed(s) => Cow::Borrowed(&s[n..]),
        Cow::Owned(s) => Cow::Owned(s[n..].to_owned()),
    }
}

/// Feed one physical line to an in-progress block literal.
///
/// Returns `Err` if the line itself is malformed (too long, a stray
/// `\r`), or if the block's invariants (no leading/trailing blank, at
/// least one content line) were violated once its end was determined.
pub(crate) fn feed<'de>(
    state: &mut BlockState,
    raw: Cow<'de, str>,
    line_no: u64,
) -> Result<Line<'de>, ErrorCode>
{
    guard(&raw)?;

    if raw.is_empty()
    {
        if !state.started
        {
            return Err(ErrorCode::BlockLeadingBlank);
        }

        match &mut state.pending_blanks
        {
            Some(p) => p.count += 1,
            None =>
            {
                state.pending_blanks = Some(crate::event::state::PendingBlanks {
                    count: 1,
                    first_line: line_no,
                })
            },
        }

        return Ok(Line::Blank);
    }

    let indent = raw.len() - raw.trim_start_matches(' ').len();

    if indent < state.content_indent
    {
        if state.pending_blanks.is_some()
        {
            return Err(ErrorCode::BlockTrailingBlank);
        }

        if !state.started
        {
            return Err(ErrorCode::BlockEmpty);
        }

        return Ok(Line::End);
    }

    if indent == raw.len()
    {
        return Err(ErrorCode::BlockWhitespaceOnly);
    }

    let flush_blanks = state.pending_blanks.take().map(|p| (p.first_line, p.count));

    state.started = true;

    Ok(Line::Content {
        flush_blanks,
        text: strip_indent(raw, state.content_indent),
    })
}

/// Finalize a block literal at end of stream.
pub(crate) fn finalize_at_eof(state: &BlockState) -> Result<(), ErrorCode>
{
    if state.pending_blanks.is_some()
    {
        return Err(ErrorCode::BlockTrailingBlank);
    }

    if !state.started
    {
        return Err(ErrorCode::BlockEmpty);
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn state() -> BlockState
    {
        BlockState::new(0)
    }

    #[test]
    fn leading_blank_is_rejected()
    {
        let mut s = state();

        assert_eq!(feed(&mut s, Cow::Borrowed(""), 1), Err(ErrorCode::BlockLeadingBlank));
    }

    #[test]
    fn first_content_line_is_stripped()
    {
        let mut s = state();

        match feed(&mut s, Cow::Borrowed("  hello"), 1).unwrap()
        {
            Line::Content { text, flush_blanks } =>
            {
                assert_eq!(text, "hello");
                assert!(flush_blanks.is_none());
            },
            _ => panic!("expected content"),
        }
    }

    #[test]
    fn interior_blank_run_is_flushed_with_next_content()
    {
        let mut s = state();

        feed(&mut s, Cow::Borrowed("  first"), 1).unwrap();
        assert!(matches!(feed(&mut s, Cow::Borrowed(""), 1).unwrap(), Line::Blank));
        assert!(matches!(feed(&mut s, Cow::Borrowed(""), 1).unwrap(), Line::Blank));

        match feed(&mut s, Cow::Borrowed("  second"), 1).unwrap()
        {
            Line::Content {
                flush_blanks: Some((_, 2)),
                text,
            } => assert_eq!(text, "second"),
            _ => panic!("expected a content line flushing two blanks"),
        }
    }

    #[test]
    fn dedent_ends_the_block()
    {
        let mut s = state();

        feed(&mut s, Cow::Borrowed("  first"), 1).unwrap();

        assert!(matches!(feed(&mut s, Cow::Borrowed("next_key: value"), 1), Ok(Line::End)));
    }

    #[test]
    fn trailing_blank_is_rejected_on_dedent()
    {
        let mut s = state();

        feed(&mut s, Cow::Borrowed("  first"), 1).unwrap();
        feed(&mut s, Cow::Borrowed(""), 1).unwrap();

        assert_eq!(feed(&mut s, Cow::Borrowed("next: x"), 1), Err(ErrorCode::BlockTrailingBlank));
    }

    #[test]
    fn empty_block_is_rejected_at_eof()
    {
        let s = state();

        assert_eq!(finalize_at_eof(&s), Err(ErrorCode::BlockEmpty));
    }

    #[test]
    fn tabs_are_permitted_in_block_content()
    {
        let mut s = state();

        assert!(feed(&mut s, Cow::Borrowed("  a\tb"), 1).is_ok());
    }

    #[test]
    fn whitespace_only_content_line_is_rejected()
    {
        let mut s = state();

        feed(&mut s, Cow::Borrowed("  first"), 1).unwrap();

        assert_eq!(
            feed(&mut s, Cow::Borrowed("    "), 2),
            Err(ErrorCode::BlockWhitespaceOnly)
        );
    }
}
