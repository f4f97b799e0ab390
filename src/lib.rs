/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library exposes methods for pulling parse events out
//! of SIML byte streams.
//!
//! SIML is a strict, line-oriented configuration format: a
//! restricted subset of YAML's block style, plus single-line
//! nestable flow sequences and literal block scalars. There
//! is no high level "deserialize into a struct" API here,
//! only the event stream the rest of a SIML toolchain is
//! built on.

#![allow(dead_code)]
#![allow(clippy::suspicious_else_formatting)]

pub mod event;
pub mod reader;

mod error;
mod lexer;

pub use error::{Category, Error, Result};
