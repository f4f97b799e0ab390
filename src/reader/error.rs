/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Error types returned from the [`siml::reader`](super) module.

use std::{error::Error as StdError, fmt, io, str::Utf8Error};

use crate::error::internal::{ErrorKind, SourceError};

/// Type alias of the `Result`s returned from this module
pub type ReaderResult<T> = std::result::Result<T, ReaderError>;

/// Possible errors that can occur while reading lines from a
/// SIML byte stream.
#[derive(Debug)]
pub enum ReaderError
{
    /// Encountered an invalid UTF8 sequence
    Utf8(Utf8Error),
    /// Catch all wrapper for any underlying IO errors reported to us
    Io(io::Error),
}

impl fmt::Display for ReaderError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self, f)
    }
}

impl StdError for ReaderError
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        match self
        {
            ReaderError::Utf8(ref e) => Some(e),
            ReaderError::Io(ref e) => Some(e),
        }
    }
}

impl From<Utf8Error> for ReaderError
{
    fn from(e: Utf8Error) -> Self
    {
        Self::Utf8(e)
    }
}

impl From<io::Error> for ReaderError
{
    fn from(e: io::Error) -> Self
    {
        Self::Io(e)
    }
}

impl From<ReaderError> for ErrorKind
{
    fn from(err: ReaderError) -> Self
    {
        match err
        {
            // SIML source text must already be UTF-8; a decode failure here
            // is treated the same as any other I/O-level failure to produce
            // input, since it is not a grammar violation.
            ReaderError::Utf8(_) => SourceError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "input was not valid UTF-8",
            ))
            .into(),
            ReaderError::Io(e) => SourceError::Io(e).into(),
        }
    }
}
