/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Mapping key validation: `[A-Za-z_][A-Za-z0-9_.-]*`, bounded length.

use super::MAX_KEY_LEN;
use crate::error::internal::ErrorCode;

/// Validate a mapping key atom.
pub(crate) fn validate(key: &str) -> Result<(), ErrorCode>
{
    if key.len() > MAX_KEY_LEN
    {
        return Err(ErrorCode::KeyTooLong);
    }

    let mut chars = key.chars();

    match chars.next()
    {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return Err(ErrorCode::KeyIllegal),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Ok(())
    }
    else
    {
        Err(ErrorCode::KeyIllegal)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn accepts_simple_key()
    {
        assert_eq!(validate("name"), Ok(()));
    }

    #[test]
    fn accepts_dots_dashes_underscores()
    {
        assert_eq!(validate("my_key-name.v2"), Ok(()));
    }

    #[test]
    fn rejects_leading_digit()
    {
        assert_eq!(validate("2fast"), Err(ErrorCode::KeyIllegal));
    }

    #[test]
    fn rejects_empty_key()
    {
        assert_eq!(validate(""), Err(ErrorCode::KeyIllegal));
    }

    #[test]
    fn rejects_overlong_key()
    {
        let key = "a".repeat(super::MAX_KEY_LEN + 1);

        assert_eq!(validate(&key), Err(ErrorCode::KeyTooLong));
    }

    #[test]
    fn rejects_illegal_character()
    {
        assert_eq!(validate("bad key"), Err(ErrorCode::KeyIllegal));
        assert_eq!(validate("bad:key"), Err(ErrorCode::KeyIllegal));
    }
}
