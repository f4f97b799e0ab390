/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Document separator (`---`) detection.

use crate::error::internal::ErrorCode;

/// Check whether `rest` (a line with indentation already stripped) is a
/// document separator.
///
/// Returns `Ok(true)` for an exact `---`, `Ok(false)` if the line plainly
/// isn't a separator, or an error if it looks like one but is malformed —
/// SIML's separator line cannot carry an inline comment or any trailing
/// content, unlike some looser historical variants of this grammar.
pub(crate) fn check(rest: &str) -> Result<bool, ErrorCode>
{
    if rest == "---"
    {
        return Ok(true);
    }

    if let Some(trailing) = rest.strip_prefix("---")
    {
        return if trailing.starts_with('#')
        {
            Err(ErrorCode::SeparatorInlineComment)
        }
        else
        {
            Err(ErrorCode::SeparatorFormat)
        };
    }

    Ok(false)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn bare_separator_is_recognized()
    {
        assert_eq!(check("---"), Ok(true));
    }

    #[test]
    fn unrelated_line_is_not_a_separator()
    {
        assert_eq!(check("key: value"), Ok(false));
    }

    #[test]
    fn trailing_comment_is_rejected()
    {
        assert_eq!(check("--- # hi"), Err(ErrorCode::SeparatorInlineComment));
    }

    #[test]
    fn trailing_junk_is_rejected()
    {
        assert_eq!(check("----"), Err(ErrorCode::SeparatorFormat));
        assert_eq!(check("--- x"), Err(ErrorCode::SeparatorFormat));
    }
}
