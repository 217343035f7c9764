use core::fmt;

use super::attributes::Attributes;
use super::elements::normalize_tag_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenTag,
    CloseTag,
    Comment,
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::OpenTag => "OPEN_TAG",
            TokenKind::CloseTag => "CLOSE_TAG",
            TokenKind::Comment => "COMMENT",
            TokenKind::Text => "TEXT",
        };
        write!(f, "{}", name)
    }
}

/// One event of the token stream. `raw` is always the exact source text the
/// token was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attr=value ...>` or `<name ... />`. The name is lowercased.
    OpenTag {
        name: String,
        attributes: Attributes,
        raw: &'a str,
    },
    /// `</...>`. The name is everything between `</` and `>`, lowercased.
    CloseTag { name: String, raw: &'a str },
    /// `<!--...-->`. `content` excludes the delimiters.
    Comment { content: &'a str, raw: &'a str },
    /// Anything the grammar does not recognise.
    Text(&'a str),
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenTag { .. } => TokenKind::OpenTag,
            Token::CloseTag { .. } => TokenKind::CloseTag,
            Token::Comment { .. } => TokenKind::Comment,
            Token::Text(_) => TokenKind::Text,
        }
    }

    pub fn raw(&self) -> &'a str {
        match self {
            Token::OpenTag { raw, .. } | Token::CloseTag { raw, .. } | Token::Comment { raw, .. } => {
                *raw
            }
            Token::Text(text) => *text,
        }
    }
}

// A construct recognised by the scanner, before names are normalized and
// attributes are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Construct<'a> {
    Open { name: &'a str, attributes: &'a str },
    Close { name: &'a str },
    Comment { content: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Matched<'a> {
    pub start: usize,
    pub end: usize,
    pub construct: Construct<'a>,
}

/// Stateless scanner over one input. All position state lives in the
/// caller, which passes the offset to resume from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scanner<'a> {
    s: &'a str,
    last_gt: Option<usize>,
    last_comment_end: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            s: input,
            last_gt: input.bytes().rposition(|b| b == b'>'),
            last_comment_end: input.rfind("-->"),
        }
    }

    /// Finds the leftmost construct starting at or after `from`.
    pub fn scan_from(&self, from: usize) -> Option<Matched<'a>> {
        let last_gt = self.last_gt?;
        let mut at = from;
        while at < last_gt {
            let lt = find_byte(self.s.as_bytes(), b'<', at)?;
            if lt >= last_gt {
                return None;
            }
            if let Some(matched) = self.match_at(lt, last_gt) {
                return Some(matched);
            }
            at = lt + 1;
        }
        None
    }

    fn match_at(&self, lt: usize, last_gt: usize) -> Option<Matched<'a>> {
        let bytes = self.s.as_bytes();
        let next = *bytes.get(lt + 1)?;

        if is_word_byte(next) {
            let name_end = scan_bytes(bytes, lt + 1, is_word_byte);
            let attributes_end = self.attribute_list_end(name_end, last_gt);
            let gt = find_byte(bytes, b'>', attributes_end)?;
            return Some(Matched {
                start: lt,
                end: gt + 1,
                construct: Construct::Open {
                    name: &self.s[lt + 1..name_end],
                    attributes: &self.s[name_end..attributes_end],
                },
            });
        }

        if next == b'/' {
            // At least one character must sit between `</` and `>`.
            let name_start = lt + 2;
            if bytes.get(name_start).map_or(true, |&b| b == b'>') {
                return None;
            }
            let gt = find_byte(bytes, b'>', name_start)?;
            return Some(Matched {
                start: lt,
                end: gt + 1,
                construct: Construct::Close {
                    name: &self.s[name_start..gt],
                },
            });
        }

        if bytes[lt + 1..].starts_with(b"!--") {
            let content_start = lt + 4;
            if self.last_comment_end.map_or(true, |end| end < content_start) {
                return None;
            }
            let close = content_start + self.s[content_start..].find("-->")?;
            return Some(Matched {
                start: lt,
                end: close + 3,
                construct: Construct::Comment {
                    content: &self.s[content_start..close],
                },
            });
        }

        None
    }

    // End of the attribute list that follows a tag name at `from`.
    //
    // Each round takes whitespace, a maximal attribute name and, when an `=`
    // follows, a value. A quoted value is only taken if some `>` still
    // follows its closing quote; otherwise the value is read unquoted,
    // starting at the quote character. Names and unquoted values never
    // contain `>`, so they always leave one ahead.
    fn attribute_list_end(&self, from: usize, last_gt: usize) -> usize {
        let bytes = self.s.as_bytes();
        let mut pos = from;
        loop {
            let name_start = skip_space(self.s, pos);
            if name_start == pos {
                return pos;
            }
            let name_end = scan_bytes(bytes, name_start, is_attr_name_byte);
            if name_end == name_start {
                return pos;
            }
            pos = match value_after(self.s, name_end) {
                Some(value) if value.end <= last_gt => value.end,
                Some(value) => value.unquoted_end.unwrap_or(name_end),
                None => name_end,
            };
        }
    }
}

/// Where an attribute value ends, as read by [`value_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueSpan<'a> {
    /// The value with any quotes stripped.
    pub value: &'a str,
    pub end: usize,
    /// For quoted values, where the value would end if it were read
    /// unquoted. `None` if that reading is empty.
    pub unquoted_end: Option<usize>,
}

/// Reads `\s*=\s*value` at `pos`, where `value` is `"..."`, `'...'` or a run
/// of characters other than whitespace and `>`.
pub(crate) fn value_after(s: &str, pos: usize) -> Option<ValueSpan<'_>> {
    let bytes = s.as_bytes();
    let eq = skip_space(s, pos);
    if bytes.get(eq) != Some(&b'=') {
        return None;
    }
    let start = skip_space(s, eq + 1);
    let unquoted_end = scan_unquoted(s, start);
    let unquoted = (unquoted_end > start).then_some(unquoted_end);

    if let Some(&quote) = bytes.get(start).filter(|&&b| b == b'"' || b == b'\'') {
        if let Some(close) = find_byte(bytes, quote, start + 1) {
            return Some(ValueSpan {
                value: &s[start + 1..close],
                end: close + 1,
                unquoted_end: unquoted,
            });
        }
    }

    unquoted.map(|end| ValueSpan {
        value: &s[start..end],
        end,
        unquoted_end: None,
    })
}

/// Iterator over the token stream of one input.
///
/// ```
/// use tagsieve::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("a<b>c").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].raw(), "<b>");
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    s: &'a str,
    scanner: Scanner<'a>,
    pos: usize,
    pending: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            s: input,
            scanner: Scanner::new(input),
            pos: 0,
            pending: None,
        }
    }

    fn build_token(&self, matched: Matched<'a>) -> Token<'a> {
        let raw = &self.s[matched.start..matched.end];
        match matched.construct {
            Construct::Open { name, attributes } => Token::OpenTag {
                name: normalize_tag_name(name),
                attributes: Attributes::parse(attributes),
                raw,
            },
            Construct::Close { name } => Token::CloseTag {
                name: normalize_tag_name(name),
                raw,
            },
            Construct::Comment { content } => Token::Comment { content, raw },
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.pos >= self.s.len() {
            return None;
        }

        let start = self.pos;
        match self.scanner.scan_from(start) {
            Some(matched) => {
                let token = self.build_token(matched);
                self.pos = matched.end;
                if matched.start > start {
                    self.pending = Some(token);
                    Some(Token::Text(&self.s[start..matched.start]))
                } else {
                    Some(token)
                }
            }
            None => {
                self.pos = self.s.len();
                Some(Token::Text(&self.s[start..]))
            }
        }
    }
}

/// `[A-Za-z0-9_]`
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `[A-Za-z0-9_:-]`
pub(crate) fn is_attr_name_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'-' || b == b':'
}

// ECMAScript `\s`: White_Space minus U+0085, plus U+FEFF.
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub(crate) fn skip_space(s: &str, from: usize) -> usize {
    s[from..]
        .char_indices()
        .find(|&(_, c)| !is_space(c))
        .map_or(s.len(), |(i, _)| from + i)
}

fn scan_unquoted(s: &str, from: usize) -> usize {
    s[from..]
        .char_indices()
        .find(|&(_, c)| c == '>' || is_space(c))
        .map_or(s.len(), |(i, _)| from + i)
}

pub(crate) fn scan_bytes(bytes: &[u8], from: usize, accept: fn(u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !accept(b))
        .map_or(bytes.len(), |i| from + i)
}

fn find_byte(bytes: &[u8], byte: u8, start: usize) -> Option<usize> {
    bytes
        .get(start..)?
        .iter()
        .position(|&b| b == byte)
        .map(|i| start + i)
}
