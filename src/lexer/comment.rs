/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Comment parsing: full-line comments and inline comments trailing a
//! scalar value.

use super::{MAX_COMMENT_ALIGN, MAX_COMMENT_LEN};
use crate::error::internal::ErrorCode;

/// Validate and extract the text of a full-line comment.
///
/// `rest` must already be known to start with `#` (the caller dispatches
/// on that); exactly one space must follow before the comment's text.
pub(crate) fn full_line(rest: &str) -> Result<&str, ErrorCode>
{
    debug_assert!(rest.starts_with('#'));

    let after_hash = &rest[1..];
    let text = after_hash.strip_prefix(' ').ok_or(ErrorCode::CommentSpacing)?;

    if text.is_empty()
    {
        return Err(ErrorCode::EmptyComment);
    }

    if text.len() > MAX_COMMENT_LEN
    {
        return Err(ErrorCode::InlineCommentTooLong);
    }

    Ok(text)
}

/// Split a trailing inline comment off of a scalar value.
///
/// Returns `(scalar, None)` if there is no `#` in the value at all.
/// Otherwise the `#` must be preceded by at least one space: the run of
/// spaces immediately before it is the comment's *alignment*, returned
/// alongside its text so a caller that cares can inspect it. Alignment
/// beyond [`MAX_COMMENT_ALIGN`] is rejected; exactly one space must
/// follow the `#` before its text.
pub(crate) fn split_inline(value: &str) -> Result<(&str, Option<(&str, usize)>), ErrorCode>
{
    let hash_pos = match value.find('#')
    {
        Some(pos) => pos,
        None => return Ok((value, None)),
    };

    let bytes = value.as_bytes();

    if hash_pos == 0 || bytes[hash_pos - 1] != b' '
    {
        return Err(ErrorCode::InlineCommentSpacing);
    }

    let mut align = 0;

    while align < hash_pos && bytes[hash_pos - 1 - align] == b' '
    {
        align += 1;
    }

    if align > MAX_COMMENT_ALIGN
    {
        return Err(ErrorCode::InlineCommentAlignTooLong);
    }

    let scalar = &value[..hash_pos - align];
    let after_hash = &value[hash_pos + 1..];
    let text = after_hash
        .strip_prefix(' ')
        .ok_or(ErrorCode::InlineCommentAlignment)?;

    if text.is_empty()
    {
        return Err(ErrorCode::EmptyComment);
    }

    if text.len() > MAX_COMMENT_LEN
    {
        return Err(ErrorCode::InlineCommentTooLong);
    }

    Ok((scalar, Some((text, align))))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn full_line_comment_text()
    {
        assert_eq!(full_line("# hello"), Ok("hello"));
    }

    #[test]
    fn full_line_requires_one_space()
    {
        assert_eq!(full_line("#hello"), Err(ErrorCode::CommentSpacing));
    }

    #[test]
    fn full_line_rejects_empty_text()
    {
        assert_eq!(full_line("# "), Err(ErrorCode::EmptyComment));
    }

    #[test]
    fn inline_comment_is_split_off()
    {
        assert_eq!(split_inline("42 # the answer"), Ok(("42", Some(("the answer", 1)))));
    }

    #[test]
    fn value_without_hash_is_untouched()
    {
        assert_eq!(split_inline("no hash here"), Ok(("no hash here", None)));
    }

    #[test]
    fn inline_comment_accepts_multiple_leading_spaces()
    {
        assert_eq!(
            split_inline("42  # two spaces before"),
            Ok(("42", Some(("two spaces before", 2))))
        );
    }

    #[test]
    fn inline_comment_rejects_glued_hash()
    {
        assert_eq!(split_inline("42# no space"), Err(ErrorCode::InlineCommentSpacing));
    }

    #[test]
    fn inline_comment_alignment_boundary()
    {
        let value = format!("42{}# aligned", " ".repeat(255));
        assert_eq!(split_inline(&value), Ok(("42", Some(("aligned", 255)))));

        let value = format!("42{}# aligned", " ".repeat(256));
        assert_eq!(split_inline(&value), Err(ErrorCode::InlineCommentAlignTooLong));
    }

    #[test]
    fn inline_comment_requires_single_space_after_hash()
    {
        assert_eq!(split_inline("42 #nope"), Err(ErrorCode::InlineCommentAlignment));
    }
}
