/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Pure, context-free lexical helpers applied before any structural
//! interpretation of a line.
//!
//! Nothing in this module carries state between lines; the container
//! stack and mode live in [`crate::event::state`].

pub(crate) mod comment;
pub(crate) mod guard;
pub(crate) mod indent;
pub(crate) mod key;
pub(crate) mod separator;

/// Maximum length of a single physical line, in bytes.
pub const MAX_LINE_LEN: usize = 4608;

/// Maximum length of a mapping key.
pub const MAX_KEY_LEN: usize = 128;

/// Maximum length of a single block literal content line.
pub const MAX_BLOCK_LINE_LEN: usize = 4096;

/// Maximum length of a single flow sequence element.
pub const MAX_FLOW_ELEM_LEN: usize = 128;

/// Maximum length of an inline or full-line comment's text.
pub const MAX_COMMENT_LEN: usize = 256;

/// Maximum number of spaces allowed between a value and its trailing
/// inline comment's `#`.
pub const MAX_COMMENT_ALIGN: usize = 255;

/// Maximum supported container nesting depth.
pub const MAX_DEPTH: usize = 32;

/// The byte order mark, when encoded as UTF-8.
pub const BOM: &str = "\u{feff}";
