/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{
    borrow::Cow,
    cell::RefCell,
    fmt, io,
    io::{BufRead, BufReader},
};

use super::{error::ReaderResult, private, Read};

/// A [`Read`](super::Read) implementor over an arbitrary [`std::io::Read`].
///
/// Unlike [`BorrowReader`](super::borrow::BorrowReader), this cannot hand
/// out zero-copy slices: a non-rewindable byte stream offers no buffer
/// whose lifetime outlives a single `pull()` call, so each line is
/// allocated fresh into an owned [`String`] and returned as
/// [`Cow::Owned`]. This is a deliberate simplification, not an oversight —
/// see `DESIGN.md` for the tradeoff against a buffer-swapping, `unsafe`
/// approach.
pub struct LineReader
{
    inner: RefCell<BufReader<Box<dyn io::Read>>>,
}

impl LineReader
{
    /// Instantiate a new [`LineReader`] from the given [`std::io::Read`].
    pub fn new<T>(src: T) -> Self
    where
        T: io::Read + 'static,
    {
        Self {
            inner: RefCell::new(BufReader::new(Box::new(src))),
        }
    }
}

impl Read for LineReader
{
    fn pull<'de>(&'de self) -> ReaderResult<Option<Cow<'de, str>>>
    {
        let mut buf = String::new();
        let n = self.inner.borrow_mut().read_line(&mut buf)?;

        if n == 0
        {
            return Ok(None);
        }

        if buf.ends_with('\n')
        {
            buf.pop();
        }

        Ok(Some(Cow::Owned(buf)))
    }
}

impl fmt::Debug for LineReader
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("LineReader")
            .field("inner", &"BufReader<dyn Read>")
            .finish()
    }
}

impl private::Sealed for LineReader {}
