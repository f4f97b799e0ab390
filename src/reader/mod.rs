/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the adapters that turn raw bytes into
//! the physical lines the parser consumes.
//!
//! This behavior is defined by the [`Read`] trait, which is
//! sealed and cannot be implemented outside of this library.
//!
//! There are three conversions supported, each with a top
//! level function handling the conversion:
//!
//! - `&str` => [`from_utf8()`]
//! - `&[u8]` => [`try_from_bytes()`]
//! - `T: std::io::Read` => [`from_read()`]

pub mod borrow;
pub mod owned;

pub mod error;

use std::borrow::Cow;

use crate::{
    error::Error,
    reader::{borrow::BorrowReader, error::ReaderResult, owned::LineReader, private::Sealed},
};

/// Instantiate a new [`Read`]er from the given UTF8 string slice.
///
/// ## Examples
///
/// ```rust
/// use siml::reader::from_utf8;
///
/// let doc = "name: demo\n";
///
/// let reader = from_utf8(doc);
/// ```
pub fn from_utf8(utf8: &str) -> BorrowReader<'_>
{
    BorrowReader::new(utf8)
}

/// Instantiate a new [`Read`]er from the given [`std::io::Read`] source.
///
/// ## Examples
///
/// ```no_run
/// use std::fs::File;
///
/// use siml::reader::from_read;
///
/// let file = File::open("config.siml")?;
///
/// let reader = from_read(file);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn from_read<R>(src: R) -> LineReader
where
    R: std::io::Read + 'static,
{
    LineReader::new(src)
}

/// Try to instantiate a new [`Read`]er from the given byte slice.
///
/// ## Errors
///
/// This function errors if the provided byte slice is not valid UTF8.
///
/// ## Examples
///
/// ```rust
/// use siml::reader::try_from_bytes;
///
/// let doc = b"name: demo\n";
///
/// let reader = try_from_bytes(doc);
/// assert!(reader.is_ok())
/// ```
pub fn try_from_bytes(slice: &[u8]) -> std::result::Result<BorrowReader<'_>, Error>
{
    BorrowReader::try_from_bytes(slice).map_err(Into::into)
}

/// Sealed interface over a line source.
///
/// A [`Read`] implementor hands back one physical line at a time, with no
/// trailing line terminator, or `None` once the underlying source is
/// exhausted. The key feature here is `&'de self`: the returned slice's
/// lifetime is tied to the borrow of the reader itself, not to any single
/// call, which is what lets [`borrow::BorrowReader`] hand out zero-copy
/// slices of its caller-owned buffer.
pub trait Read: std::fmt::Debug + Sealed
{
    /// Pull the next physical line out of the source.
    ///
    /// Returns `Ok(None)` once the source is exhausted. The returned slice
    /// never includes the line's terminator.
    fn pull<'de>(&'de self) -> ReaderResult<Option<Cow<'de, str>>>;
}

mod private
{
    pub trait Sealed {}
}
