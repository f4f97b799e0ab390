/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains an implementation of [`Read`](super::Read) for
//! borrowed UTF8 slices (`&str`s).

use std::{borrow::Cow, cell::Cell};

use super::{error::ReaderResult, private, Read};

/// A [`Read`](super::Read) implementor over a borrowed `&str`.
///
/// Pulls are zero-copy: each returned line is a [`Cow::Borrowed`] slice of
/// the original string, split on plain `\n`. The cursor is a `Cell<usize>`
/// byte offset rather than an `&mut` position, since [`Read::pull`] only
/// ever takes `&self` — no `unsafe` is needed here because nothing is ever
/// mutated except a `Copy` integer.
#[derive(Debug, Clone)]
pub struct BorrowReader<'de>
{
    data:   &'de str,
    cursor: Cell<usize>,
}

impl<'de> BorrowReader<'de>
{
    /// Instantiate a new [`BorrowReader`] from the given UTF8 slice
    pub fn new(data: &'de str) -> Self
    {
        Self {
            data,
            cursor: Cell::new(0),
        }
    }

    /// Instantiate a new [`BorrowReader`] from the given bytes, returning
    /// an error if they are not valid UTF8.
    pub(crate) fn try_from_bytes(data: &'de [u8]) -> ReaderResult<Self>
    {
        let this = std::str::from_utf8(data).map(Self::new)?;

        Ok(this)
    }
}

impl<'x> Read for BorrowReader<'x>
{
    fn pull<'de>(&'de self) -> ReaderResult<Option<Cow<'de, str>>>
    {
        let start = self.cursor.get();

        if start >= self.data.len()
        {
            return Ok(None);
        }

        let rest = &self.data[start..];
        let (line, advance) = match rest.find('\n')
        {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };

        self.cursor.set(start + advance);

        Ok(Some(Cow::Borrowed(line)))
    }
}

impl private::Sealed for BorrowReader<'_> {}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn splits_on_newline() -> anyhow::Result<()>
    {
        let r = BorrowReader::new("a\nb\nc");

        assert_eq!(r.pull()?, Some(Cow::Borrowed("a")));
        assert_eq!(r.pull()?, Some(Cow::Borrowed("b")));
        assert_eq!(r.pull()?, Some(Cow::Borrowed("c")));
        assert_eq!(r.pull()?, None);

        Ok(())
    }

    #[test]
    fn trailing_newline_has_no_extra_empty_line() -> anyhow::Result<()>
    {
        let r = BorrowReader::new("a\n");

        assert_eq!(r.pull()?, Some(Cow::Borrowed("a")));
        assert_eq!(r.pull()?, None);

        Ok(())
    }

    #[test]
    fn empty_input_yields_no_lines() -> anyhow::Result<()>
    {
        let r = BorrowReader::new("");

        assert_eq!(r.pull()?, None);

        Ok(())
    }

    #[test]
    fn pulled_slices_borrow_the_original_data() -> anyhow::Result<()>
    {
        let owner = String::from("hello\nworld");
        let r = BorrowReader::new(&owner);

        match r.pull()?
        {
            Some(Cow::Borrowed(s)) => assert_eq!(s, "hello"),
            other => panic!("expected a borrowed slice, got {:?}", other),
        }

        Ok(())
    }
}
