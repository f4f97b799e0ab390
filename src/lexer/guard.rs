/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Lexical guards applied to every physical line before any structural
//! interpretation: length, byte order mark, carriage returns and tabs.

use super::{BOM, MAX_LINE_LEN};
use crate::error::internal::ErrorCode;

/// Strip a leading byte order mark from the first line of a stream.
///
/// The BOM is rejected, not silently accepted: this returns the line with
/// the mark removed plus an error so the parser can latch
/// [`ErrorCode::Bom`] at column 0 of line 1.
pub(crate) fn strip_bom(line: &str) -> (&str, Option<ErrorCode>)
{
    match line.strip_prefix(BOM)
    {
        Some(rest) => (rest, Some(ErrorCode::Bom)),
        None => (line, None),
    }
}

/// Check the length, carriage-return and tab invariants for `line`.
///
/// Does not check indentation; see [`super::indent::compute`].
pub(crate) fn check(line: &str) -> Result<(), ErrorCode>
{
    if line.len() > MAX_LINE_LEN
    {
        return Err(ErrorCode::LineTooLong);
    }

    if line.contains('\r')
    {
        return Err(ErrorCode::CarriageReturn);
    }

    if line.contains('\t')
    {
        return Err(ErrorCode::Tab);
    }

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn rejects_carriage_return()
    {
        assert_eq!(check("key: value\r"), Err(ErrorCode::CarriageReturn));
    }

    #[test]
    fn rejects_tab()
    {
        assert_eq!(check("key:\tvalue"), Err(ErrorCode::Tab));
    }

    #[test]
    fn rejects_overlong_line()
    {
        let long = "a".repeat(MAX_LINE_LEN + 1);

        assert_eq!(check(&long), Err(ErrorCode::LineTooLong));
    }

    #[test]
    fn accepts_plain_line()
    {
        assert_eq!(check("key: value"), Ok(()));
    }

    #[test]
    fn strips_and_flags_bom()
    {
        let (rest, err) = strip_bom("\u{feff}key: value");

        assert_eq!(rest, "key: value");
        assert_eq!(err, Some(ErrorCode::Bom));
    }
}
