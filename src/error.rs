/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{error::Error as StdError, fmt};

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque type representing all possible errors which can
/// occur during library usage.
pub struct Error
{
    inner: Box<internal::Error>,
}

impl Error
{
    /// The physical line at which the error occurred, 1-indexed.
    pub fn line(&self) -> u64
    {
        self.inner.line
    }

    /// The column into the line where the error occurred.
    pub fn column(&self) -> u64
    {
        self.inner.column
    }

    /// Categorize the error into one of the following:
    ///
    /// - [`Category::Syntax`] The document violated a grammar or
    ///   whitespace invariant
    /// - [`Category::Io`] The underlying line source surfaced an
    ///   error while reading
    /// - [`Category::Eof`] The stream ended where more input was
    ///   required
    pub fn classify(&self) -> Category
    {
        self.inner.classify()
    }

    /// Checks whether this error was contextualized with a line
    /// number.
    pub fn has_context(&self) -> bool
    {
        self.inner.has_context()
    }

    pub(crate) fn new(err: internal::Error) -> Self
    {
        Self {
            inner: Box::new(err),
        }
    }
}

/// Rough category of an [`Error`], useful for callers that want
/// to make a decision without matching every error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The underlying line source returned an error while
    /// attempting to read
    Io,

    /// The document was not syntactically valid
    Syntax,

    /// The stream ended before the grammar allowed it to
    Eof,
}

pub(crate) mod internal
{
    use std::{error::Error as StdError, fmt, io};

    use super::Category;

    /// Internal error representation, carrying enough position
    /// metadata to contextualize the error after the fact.
    pub(crate) struct Error
    {
        pub kind:   ErrorKind,
        pub line:   u64,
        pub column: u64,
    }

    impl Error
    {
        pub fn new<T>(err: T) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self::with_context(err, 0, 0)
        }

        pub fn with_context<T>(err: T, line: u64, column: u64) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self {
                kind: err.into(),
                line,
                column,
            }
        }

        /// Checks whether this error is contextualized.
        ///
        /// Only errors built without a line number have `line
        /// == 0`; every error latched by the parser carries the
        /// 1-indexed physical line it occurred on.
        pub fn has_context(&self) -> bool
        {
            self.line != 0
        }

        pub fn classify(&self) -> Category
        {
            Into::into(&self.kind)
        }
    }

    /// Unified wrapper around the actual error variants we can
    /// produce.
    #[derive(Debug)]
    pub(crate) enum ErrorKind
    {
        Code(ErrorCode),
        Source(SourceError),
    }

    /// Lightweight, `Copy` error codes specific to this library.
    ///
    /// Each variant corresponds to exactly one violated grammar
    /// or whitespace rule, so a caller can match on a single code
    /// without ambiguity about which rule fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ErrorCode
    {
        /*
         * ==== Lexical guard errors (applied to every physical line) ====
         */
        /// Physical line exceeded the maximum line length.
        LineTooLong,
        /// A UTF-8 byte order mark was found at the start of the stream.
        Bom,
        /// A carriage return ('\r') was found in the line.
        CarriageReturn,
        /// A tab character was found outside a block literal body.
        Tab,
        /// A line contained only whitespace (use an empty line instead).
        WhitespaceOnlyLine,
        /// An indent was not a multiple of two spaces.
        IndentNotEven,

        /*
         * ==== Key / separator errors ====
         */
        /// A mapping key exceeded the maximum key length.
        KeyTooLong,
        /// A mapping key used a character outside `[A-Za-z_][A-Za-z0-9_.-]*`.
        KeyIllegal,
        /// A `---` document separator was malformed.
        SeparatorFormat,
        /// A `---` document separator was not at indent zero.
        SeparatorIndent,
        /// A `---` document separator was followed by an inline comment.
        SeparatorInlineComment,
        /// A full-line comment's `#` did not have exactly one trailing space.
        CommentSpacing,
        /// A mapping `KEY:` or sequence `-` marker was followed by a value
        /// with anything other than exactly one separating space.
        ValueSpacing,
        /// A full-line comment's indent matched neither an open container
        /// nor a pending header's child indent.
        CommentIndent,

        /*
         * ==== Structural errors ====
         */
        /// A header-only mapping key (`KEY:`) was not followed by a
        /// nested block.
        HeaderMapNoNested,
        /// A header-only sequence entry (`-`) was not followed by a
        /// nested block.
        HeaderSeqNoNested,
        /// A line's indent did not match any open container, and was not
        /// exactly one nesting level (2 spaces) deeper than the innermost one.
        IndentWrong,
        /// A sequence entry (`-`) and a mapping key were both found at
        /// the same indent inside the same container.
        NodeKindMix,
        /// A document contained a bare top-level scalar; every document
        /// root must be a mapping or a sequence.
        DocumentScalarRoot,
        /// The same key appeared twice in one mapping.
        DuplicateKey,
        /// Container nesting exceeded the maximum supported depth.
        NestingTooDeep,
        /// A `---` separator was seen before the first document began, or
        /// while no document was open (including at end of stream, after
        /// a trailing separator left no document behind it).
        SeparatorAfterDoc,

        /*
         * ==== Inline comment errors ====
         */
        /// An inline comment was not separated from its value by at least
        /// one space before the `#`.
        InlineCommentSpacing,
        /// An inline comment's `#` did not have exactly one trailing space.
        InlineCommentAlignment,
        /// An inline comment's alignment (spaces between the value and the
        /// `#`) exceeded the maximum supported alignment.
        InlineCommentAlignTooLong,
        /// An inline comment exceeded the maximum inline comment length.
        InlineCommentTooLong,
        /// An inline or full-line comment had no text after the `# `.
        EmptyComment,

        /*
         * ==== Flow sequence errors ====
         */
        /// A flow sequence contained whitespace, which is forbidden.
        FlowWhitespace,
        /// A flow sequence was missing its closing `]`.
        FlowUnterminated,
        /// Characters followed a flow sequence's closing `]`.
        FlowTrailingChars,
        /// A flow sequence contained an empty element (`,,` or `[,`).
        FlowEmptyElement,
        /// A flow sequence ended with a trailing comma before `]`.
        FlowTrailingComma,
        /// A flow sequence element exceeded the maximum element length.
        FlowElementTooLong,

        /*
         * ==== Block literal errors ====
         */
        /// A block literal content line was indented less than `B+2`.
        BlockWrongIndent,
        /// A block literal content line exceeded the maximum block line
        /// length.
        BlockLineTooLong,
        /// A block literal's first content line was blank.
        BlockLeadingBlank,
        /// A block literal's last content line was blank.
        BlockTrailingBlank,
        /// A `|` header was immediately followed by EOF or dedent, with
        /// no content lines at all.
        BlockEmpty,
        /// A block literal content line, indented far enough to be
        /// content, consisted entirely of spaces.
        BlockWhitespaceOnly,

        /// The stream ended while more input was structurally required.
        UnexpectedEof,
    }

    /// Heavier errors that wrap an external cause.
    #[derive(Debug)]
    pub(crate) enum SourceError
    {
        /// Catch-all wrapper for IO errors surfaced by a line source.
        Io(io::Error),
    }

    impl fmt::Debug for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            let mut this = f.debug_struct("Error");

            this.field("kind", &self.kind);

            if self.has_context()
            {
                this.field("line", &self.line).field("column", &self.column);
            }

            this.finish()
        }
    }

    impl fmt::Display for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use fmt::Display;

            if self.has_context()
            {
                f.write_fmt(format_args!(
                    "{}, on line {}, column {}",
                    self.kind, self.line, self.column
                ))
            }
            else
            {
                Display::fmt(&self.kind, f)
            }
        }
    }

    impl StdError for Error
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            StdError::source(&self.kind)
        }
    }

    impl From<Error> for super::Error
    {
        fn from(err: Error) -> Self
        {
            Self::new(err)
        }
    }

    impl<T> From<T> for Error
    where
        T: Into<ErrorKind>,
    {
        fn from(t: T) -> Self
        {
            Error::new(t.into())
        }
    }

    impl From<&'_ ErrorKind> for Category
    {
        fn from(kind: &'_ ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::Code(e) => e.into(),
                ErrorKind::Source(e) => e.into(),
            }
        }
    }

    impl fmt::Display for ErrorKind
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                ErrorKind::Code(ref e) => fmt::Display::fmt(e, f),
                ErrorKind::Source(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }

    impl StdError for ErrorKind {}

    impl From<ErrorCode> for ErrorKind
    {
        fn from(e: ErrorCode) -> Self
        {
            ErrorKind::Code(e)
        }
    }

    impl From<SourceError> for ErrorKind
    {
        fn from(e: SourceError) -> Self
        {
            ErrorKind::Source(e)
        }
    }

    impl From<ErrorCode> for Category
    {
        fn from(code: ErrorCode) -> Self
        {
            use ErrorCode::*;

            match code
            {
                UnexpectedEof => Category::Eof,
                _ => Category::Syntax,
            }
        }
    }

    impl From<&'_ ErrorCode> for Category
    {
        fn from(code: &'_ ErrorCode) -> Self
        {
            From::from(*code)
        }
    }

    impl fmt::Display for ErrorCode
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use ErrorCode::*;

            match self
            {
                LineTooLong => f.write_str("line exceeds the maximum line length"),
                Bom => f.write_str("byte order mark is not allowed"),
                CarriageReturn => f.write_str("carriage return is not allowed, use bare LF"),
                Tab => f.write_str("tab character is not allowed here"),
                WhitespaceOnlyLine => f.write_str("line contains only whitespace"),
                IndentNotEven => f.write_str("indent is not a multiple of two spaces"),
                KeyTooLong => f.write_str("key exceeds the maximum key length"),
                KeyIllegal => f.write_str("key contains an illegal character"),
                SeparatorFormat => f.write_str("malformed document separator"),
                SeparatorIndent => f.write_str("document separator must be at indent zero"),
                SeparatorInlineComment =>
                {
                    f.write_str("document separator cannot carry an inline comment")
                },
                CommentSpacing => f.write_str("comment must have exactly one space after '#'"),
                ValueSpacing =>
                {
                    f.write_str("value must be separated from its marker by exactly one space")
                },
                CommentIndent =>
                {
                    f.write_str("comment indent matches neither an open container nor a pending header")
                },
                HeaderMapNoNested =>
                {
                    f.write_str("mapping key with no value must be followed by a nested block")
                },
                HeaderSeqNoNested =>
                {
                    f.write_str("sequence entry with no value must be followed by a nested block")
                },
                IndentWrong => f.write_str("indent does not match any open container"),
                NodeKindMix =>
                {
                    f.write_str("mapping keys and sequence entries cannot share an indent level")
                },
                DocumentScalarRoot => f.write_str("document root must be a mapping or sequence"),
                DuplicateKey => f.write_str("duplicate key in mapping"),
                NestingTooDeep => f.write_str("container nesting exceeds the supported depth"),
                SeparatorAfterDoc =>
                {
                    f.write_str("document separator must appear between two documents")
                },
                InlineCommentSpacing =>
                {
                    f.write_str("inline comment must be separated from its value by at least one space")
                },
                InlineCommentAlignment =>
                {
                    f.write_str("inline comment must have exactly one space after '#'")
                },
                InlineCommentAlignTooLong =>
                {
                    f.write_str("inline comment alignment exceeds the maximum supported alignment")
                },
                InlineCommentTooLong =>
                {
                    f.write_str("inline comment exceeds the maximum comment length")
                },
                EmptyComment => f.write_str("comment has no text"),
                FlowWhitespace => f.write_str("flow sequence cannot contain whitespace"),
                FlowUnterminated => f.write_str("flow sequence is missing a closing ']'"),
                FlowTrailingChars => f.write_str("characters follow the flow sequence's ']'"),
                FlowEmptyElement => f.write_str("flow sequence contains an empty element"),
                FlowTrailingComma => f.write_str("flow sequence has a trailing comma"),
                FlowElementTooLong =>
                {
                    f.write_str("flow sequence element exceeds the maximum element length")
                },
                BlockWrongIndent =>
                {
                    f.write_str("block literal content must be indented two spaces past its header")
                },
                BlockLineTooLong =>
                {
                    f.write_str("block literal line exceeds the maximum block line length")
                },
                BlockLeadingBlank => f.write_str("block literal cannot start with a blank line"),
                BlockTrailingBlank => f.write_str("block literal cannot end with a blank line"),
                BlockEmpty => f.write_str("block literal has no content"),
                BlockWhitespaceOnly => f.write_str("block literal content line is whitespace-only"),
                UnexpectedEof => f.write_str("unexpected end of stream"),
            }
        }
    }

    impl StdError for ErrorCode {}

    impl From<&'_ SourceError> for Category
    {
        fn from(err: &'_ SourceError) -> Self
        {
            match err
            {
                SourceError::Io(_) => Category::Io,
            }
        }
    }

    impl fmt::Display for SourceError
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                SourceError::Io(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }

    impl StdError for SourceError
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            match self
            {
                SourceError::Io(e) => Some(e),
            }
        }
    }

    impl From<io::Error> for SourceError
    {
        fn from(e: io::Error) -> Self
        {
            SourceError::Io(e)
        }
    }
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        StdError::source(&self.inner)
    }
}
