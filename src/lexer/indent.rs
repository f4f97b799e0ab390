/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Indent computation: leading-space counting, the even-space invariant,
//! and the blank-vs-whitespace-only distinction.

use crate::error::internal::ErrorCode;

/// The shape of a physical line once indentation has been accounted for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Shape<'a>
{
    /// The line was empty (`""`); a legal separator between entries.
    Blank,
    /// The line had content, at the given indent, with the indent already
    /// stripped from `rest`.
    Content
    {
        indent: usize, rest: &'a str
    },
}

/// Compute the [`Shape`] of `line`.
///
/// A line consisting entirely of spaces is rejected with
/// [`ErrorCode::WhitespaceOnlyLine`] rather than treated as blank — SIML
/// requires a true empty line as a separator. An indent that is not a
/// multiple of two spaces is rejected with [`ErrorCode::IndentNotEven`].
pub(crate) fn compute(line: &str) -> Result<Shape<'_>, ErrorCode>
{
    if line.is_empty()
    {
        return Ok(Shape::Blank);
    }

    let rest = line.trim_start_matches(' ');
    let indent = line.len() - rest.len();

    if rest.is_empty()
    {
        return Err(ErrorCode::WhitespaceOnlyLine);
    }

    if indent % 2 != 0
    {
        return Err(ErrorCode::IndentNotEven);
    }

    Ok(Shape::Content { indent, rest })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn blank_line_is_blank()
    {
        assert_eq!(compute(""), Ok(Shape::Blank));
    }

    #[test]
    fn whitespace_only_is_an_error()
    {
        assert_eq!(compute("   "), Err(ErrorCode::WhitespaceOnlyLine));
    }

    #[test]
    fn odd_indent_is_an_error()
    {
        assert_eq!(compute(" key: value"), Err(ErrorCode::IndentNotEven));
    }

    #[test]
    fn even_indent_is_accepted()
    {
        assert_eq!(
            compute("  key: value"),
            Ok(Shape::Content {
                indent: 2,
                rest:   "key: value",
            })
        );
    }
}
