/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes methods for directly pulling events out of a
//! SIML byte stream.
//!
//! ## Understanding Events
//!
//! Each event produced represents a semantic change in the underlying
//! document. Broadly, these fall into three groups:
//!
//! 1. Virtual / marker
//!     - [`StreamStart`], [`StreamEnd`]
//!     - [`DocumentStart`], [`DocumentEnd`]
//!
//! 2. Nesting change (+-)
//!     - [`MappingStart`], [`MappingEnd`]
//!     - [`SequenceStart`], [`SequenceEnd`]
//!     - [`BlockScalarStart`], [`BlockScalarEnd`]
//!
//! 3. Data
//!     - [`Scalar`]
//!     - [`BlockScalarLine`]
//!     - [`Comment`]
//!
//! Together these produce the following grammar:
//!
//! ```text
//! stream      := StreamStart document+ StreamEnd
//! document    := DocumentStart content? DocumentEnd
//! content     := Scalar | block_scalar | collection
//! block_scalar:= BlockScalarStart BlockScalarLine* BlockScalarEnd
//! collection  := sequence | mapping
//! sequence    := SequenceStart content* SequenceEnd
//! mapping     := MappingStart (Scalar content)* MappingEnd
//!
//! Comment may appear interleaved anywhere between the above productions,
//! and immediately after a Scalar that carried a trailing comment.
//!
//! ?           => 0 or 1 of prefix
//! *           => 0 or more of prefix
//! +           => 1 or more of prefix
//! ()          => production grouping
//! |           => production logical OR
//! ```
//!
//! [`StreamStart`]:      enum@types::EventData::StreamStart
//! [`StreamEnd`]:        enum@types::EventData::StreamEnd
//! [`DocumentStart`]:    enum@types::EventData::DocumentStart
//! [`DocumentEnd`]:      enum@types::EventData::DocumentEnd
//! [`MappingStart`]:     enum@types::EventData::MappingStart
//! [`MappingEnd`]:       enum@types::EventData::MappingEnd
//! [`SequenceStart`]:    enum@types::EventData::SequenceStart
//! [`SequenceEnd`]:      enum@types::EventData::SequenceEnd
//! [`BlockScalarStart`]: enum@types::EventData::BlockScalarStart
//! [`BlockScalarLine`]:  enum@types::EventData::BlockScalarLine
//! [`BlockScalarEnd`]:   enum@types::EventData::BlockScalarEnd
//! [`Scalar`]:           enum@types::EventData::Scalar
//! [`Comment`]:          enum@types::EventData::Comment

mod state;

pub mod parser;
pub mod types;

pub use parser::{EventIter, Options, Parser, Trace};
pub use types::{Event, EventData, Slice, SequenceStyle};
