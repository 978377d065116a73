//! Linear span scanner for JSX-flavoured content files.
//!
//! The input is split into contiguous [`Span`]s, each tagged with the
//! [`SpanKind`] of the scanner state it was read in. An explicit frame stack
//! replaces recursion, so nesting depth is bounded by memory only.
//!
//! Recognized structure:
//! - code: string literals, template literals and comments are single units,
//!   `{`/`}` are balanced, and `<` opens markup when it cannot be a
//!   comparison, a type argument or a type parameter list
//! - tags: quoted attribute values, `{...}` expressions, `/>` and `>`
//! - element bodies: text, `{...}` expressions, child elements, `</...>`
//!
//! Markup opened from code only counts once it is closed. When the input
//! ends with such markup still open (a `<T>value` assertion, a truncated
//! element), the scanner rewinds to its `<`, reads it as code and goes on.

use std::collections::HashSet;

/// State a byte range was read in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Code outside any markup
    Outside,
    /// Tag syntax: `<name`, attribute names, `=`, `>`, closing tags
    InTag,
    /// A quoted attribute value, delimiters included
    InAttributeValue,
    /// A `{...}` expression container or code nested in markup
    InCodeBlock,
    /// Element body text
    InTextContent,
}

/// Byte range `start..end` of the scanned input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    /// Script code. `expression` marks a `{...}` container that ends on its
    /// closing brace; `in_markup` is set once any enclosing frame is markup.
    Code {
        braces: usize,
        expression: bool,
        in_markup: bool,
    },
    Template {
        in_markup: bool,
    },
    Tag,
    Element,
}

const ROOT: Frame = Frame::Code {
    braces: 0,
    expression: false,
    in_markup: false,
};

/// Scanner state saved where markup is opened from code
#[derive(Debug)]
struct Checkpoint {
    pos: usize,
    stack: Vec<Frame>,
    spans_len: usize,
    last_span: Option<Span>,
}

/// Split `src` into classified spans covering the whole input
pub fn scan(src: &str) -> Vec<Span> {
    let mut scanner = Scanner {
        src,
        bytes: src.as_bytes(),
        pos: 0,
        stack: vec![ROOT],
        spans: Vec::new(),
        checkpoints: Vec::new(),
        rejected: HashSet::new(),
    };
    scanner.run();
    scanner.spans
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    stack: Vec<Frame>,
    spans: Vec<Span>,
    /// Markup roots opened from code and not closed yet, oldest first
    checkpoints: Vec<Checkpoint>,
    /// Positions of `<` that turned out not to open markup
    rejected: HashSet<usize>,
}

impl Scanner<'_> {
    fn run(&mut self) {
        loop {
            while self.pos < self.bytes.len() {
                match self.stack.last().copied().unwrap_or(ROOT) {
                    Frame::Code {
                        braces,
                        expression,
                        in_markup,
                    } => self.step_code(braces, expression, in_markup),
                    Frame::Template { in_markup } => self.step_template(in_markup),
                    Frame::Tag => self.step_tag(),
                    Frame::Element => self.step_element(),
                }
            }

            // The innermost unclosed root may have swallowed the closing tags
            // of the outer ones, so it is rewound first.
            let Some(checkpoint) = self.checkpoints.pop() else {
                break;
            };
            self.rewind(checkpoint);
        }
    }

    fn rewind(&mut self, checkpoint: Checkpoint) {
        self.rejected.insert(checkpoint.pos);
        self.spans.truncate(checkpoint.spans_len);
        if let (Some(saved), Some(last)) = (checkpoint.last_span, self.spans.last_mut()) {
            *last = saved;
        }
        self.stack = checkpoint.stack;
        self.pos = checkpoint.pos;
    }

    fn step_code(&mut self, braces: usize, expression: bool, in_markup: bool) {
        let kind = code_kind(in_markup);
        match self.bytes[self.pos] {
            q @ (b'\'' | b'"') => {
                let end = self.string_end(q);
                self.emit(kind, end);
            }
            b'`' => {
                self.emit(kind, self.pos + 1);
                self.stack.push(Frame::Template { in_markup });
            }
            b'/' if self.peek(1) == Some(b'/') => {
                let end = self.find_from(self.pos, b"\n").unwrap_or(self.bytes.len());
                self.emit(kind, end);
            }
            b'/' if self.peek(1) == Some(b'*') => {
                let end = self
                    .find_from(self.pos + 2, b"*/")
                    .map_or(self.bytes.len(), |i| i + 2);
                self.emit(kind, end);
            }
            b'{' => {
                self.set_braces(braces + 1);
                self.emit(kind, self.pos + 1);
            }
            b'}' => {
                self.emit(kind, self.pos + 1);
                if braces > 0 {
                    self.set_braces(braces - 1);
                } else if expression {
                    self.stack.pop();
                }
            }
            b'<' if self.starts_markup() => {
                self.checkpoints.push(Checkpoint {
                    pos: self.pos,
                    stack: self.stack.clone(),
                    spans_len: self.spans.len(),
                    last_span: self.spans.last().copied(),
                });
                self.stack.push(Frame::Tag);
            }
            _ => self.emit(kind, self.pos + 1),
        }
    }

    fn step_template(&mut self, in_markup: bool) {
        let kind = code_kind(in_markup);
        match self.bytes[self.pos] {
            b'\\' => self.emit(kind, self.pos + 2),
            b'`' => {
                self.emit(kind, self.pos + 1);
                self.stack.pop();
            }
            b'$' if self.peek(1) == Some(b'{') => {
                self.emit(kind, self.pos + 2);
                self.stack.push(Frame::Code {
                    braces: 0,
                    expression: true,
                    in_markup,
                });
            }
            _ => self.emit(kind, self.pos + 1),
        }
    }

    fn step_tag(&mut self) {
        match self.bytes[self.pos] {
            q @ (b'\'' | b'"') => {
                let end = self
                    .find_from(self.pos + 1, &[q])
                    .map_or(self.bytes.len(), |i| i + 1);
                self.emit(SpanKind::InAttributeValue, end);
            }
            b'{' => self.open_expression(),
            b'/' if self.peek(1) == Some(b'>') => {
                self.emit(SpanKind::InTag, self.pos + 2);
                self.close_markup();
            }
            b'>' => {
                self.emit(SpanKind::InTag, self.pos + 1);
                if let Some(top) = self.stack.last_mut() {
                    *top = Frame::Element;
                }
            }
            _ => self.emit(SpanKind::InTag, self.pos + 1),
        }
    }

    fn step_element(&mut self) {
        match (self.bytes[self.pos], self.peek(1)) {
            (b'{', _) => self.open_expression(),
            (b'<', Some(b'/')) => {
                let end = self
                    .find_from(self.pos, b">")
                    .map_or(self.bytes.len(), |i| i + 1);
                self.emit(SpanKind::InTag, end);
                self.close_markup();
            }
            (b'<', Some(b'!')) => {
                let end = if self.bytes[self.pos..].starts_with(b"<!--") {
                    self.find_from(self.pos + 4, b"-->")
                        .map_or(self.bytes.len(), |i| i + 3)
                } else {
                    self.find_from(self.pos, b">")
                        .map_or(self.bytes.len(), |i| i + 1)
                };
                self.emit(SpanKind::InTag, end);
            }
            (b'<', Some(c)) if c.is_ascii_alphabetic() || c == b'>' => {
                self.stack.push(Frame::Tag);
            }
            _ => self.emit(SpanKind::InTextContent, self.pos + 1),
        }
    }

    fn open_expression(&mut self) {
        self.emit(SpanKind::InCodeBlock, self.pos + 1);
        self.stack.push(Frame::Code {
            braces: 0,
            expression: true,
            in_markup: true,
        });
    }

    /// Pop a finished tag or element; a markup root opened from code is
    /// confirmed once the stack is back at its depth.
    fn close_markup(&mut self) {
        self.stack.pop();
        if self
            .checkpoints
            .last()
            .is_some_and(|c| c.stack.len() == self.stack.len())
        {
            self.checkpoints.pop();
        }
    }

    /// `<` opens markup in code when followed by a name or `>`, not preceded
    /// by something that makes it a comparison or type argument, and not
    /// starting a `<T,>` or `<T extends U>` type parameter list.
    fn starts_markup(&self) -> bool {
        if self.rejected.contains(&self.pos) {
            return false;
        }
        if !matches!(self.peek(1), Some(c) if c.is_ascii_alphabetic() || c == b'>') {
            return false;
        }
        if self.starts_type_parameters() {
            return false;
        }

        let before = self.src[..self.pos].trim_end();
        let Some(c) = before.chars().next_back() else {
            return true;
        };
        if is_ident_char(c) {
            return ends_with_word(before, "return");
        }
        !matches!(c, ')' | ']' | '.' | '"' | '\'' | '`')
    }

    fn starts_type_parameters(&self) -> bool {
        let rest = &self.src[self.pos + 1..];
        let name_len = rest
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(rest.len());
        let after = rest[name_len..].trim_start();
        after.starts_with(',')
            || after
                .strip_prefix("extends")
                .is_some_and(|tail| !tail.starts_with(is_ident_char))
    }

    /// End of a `'...'` or `"..."` literal; stops before a raw newline
    fn string_end(&self, quote: u8) -> usize {
        let mut i = self.pos + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b'\n' => return i,
                c if c == quote => return i + 1,
                _ => i += 1,
            }
        }
        self.bytes.len()
    }

    fn set_braces(&mut self, value: usize) {
        if let Some(Frame::Code { braces, .. }) = self.stack.last_mut() {
            *braces = value;
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn find_from(&self, from: usize, needle: &[u8]) -> Option<usize> {
        if from >= self.bytes.len() {
            return None;
        }
        self.bytes[from..]
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|i| i + from)
    }

    /// Classify `pos..end` as `kind` and advance, merging with the previous
    /// span when the kind is unchanged.
    fn emit(&mut self, kind: SpanKind, end: usize) {
        let end = end.min(self.bytes.len());
        let start = self.pos;
        if let Some(last) = self.spans.last_mut()
            && last.kind == kind
            && last.end == start
        {
            last.end = end;
        } else {
            self.spans.push(Span { kind, start, end });
        }
        self.pos = end;
    }
}

fn code_kind(in_markup: bool) -> SpanKind {
    if in_markup {
        SpanKind::InCodeBlock
    } else {
        SpanKind::Outside
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn ends_with_word(before: &str, word: &str) -> bool {
    before
        .strip_suffix(word)
        .is_some_and(|head| !head.ends_with(is_ident_char))
}
