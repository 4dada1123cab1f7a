//! Character-level scanning: strings, comments and escapes.
//!
//! The scanner is the only place that knows about quoting. Everything it
//! yields outside a quoted string is structural or plain text; a quoted
//! string comes out whole, so `;`, `{`, `}` and parens inside it are inert.

use std::str::CharIndices;

/// One unit of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// A character outside strings and comments.
    Char(char),
    /// A complete string literal, quotes included.
    Quoted(&'a str),
    /// A backslash escape outside strings, e.g. `\;`.
    Escaped(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Default,
    InString { quote: char, start: usize },
    InComment,
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    chars: CharIndices<'a>,
    state: ScanState,
    last_was_slash: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices(),
            state: ScanState::Default,
            last_was_slash: false,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, ch)| ch)
    }

    fn emit(&mut self, piece: Piece<'a>) -> Option<Piece<'a>> {
        self.last_was_slash = piece == Piece::Char('/');
        Some(piece)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Piece<'a>;

    /// Unterminated strings and comments run to end of input and yield nothing.
    fn next(&mut self) -> Option<Piece<'a>> {
        loop {
            let src = self.src;
            let (idx, ch) = self.chars.next()?;
            match self.state {
                ScanState::Default => match ch {
                    '"' | '\'' => {
                        self.state = ScanState::InString {
                            quote: ch,
                            start: idx,
                        };
                    }
                    '/' if self.peek_char() == Some('*') => {
                        self.chars.next();
                        self.state = ScanState::InComment;
                    }
                    '\\' => {
                        let (next_idx, next) = self.chars.next()?;
                        let end = next_idx + next.len_utf8();
                        return self.emit(Piece::Escaped(&src[idx..end]));
                    }
                    _ => return self.emit(Piece::Char(ch)),
                },
                ScanState::InString { quote, start } => {
                    if ch == '\\' {
                        self.chars.next();
                    } else if ch == quote {
                        self.state = ScanState::Default;
                        let end = idx + ch.len_utf8();
                        return self.emit(Piece::Quoted(&src[start..end]));
                    }
                }
                ScanState::InComment => {
                    if ch == '*' && self.peek_char() == Some('/') {
                        self.chars.next();
                        self.state = ScanState::Default;
                        // `/` + comment + `*` must not fuse into a comment opener.
                        if self.last_was_slash && self.peek_char() == Some('*') {
                            return self.emit(Piece::Char(' '));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(src: &str) -> Vec<Piece<'_>> {
        Scanner::new(src).collect()
    }

    #[test]
    fn strings_come_out_whole() {
        assert_eq!(
            pieces("a\"{;}\"b"),
            vec![Piece::Char('a'), Piece::Quoted("\"{;}\""), Piece::Char('b')]
        );
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        assert_eq!(pieces(r#"'it\'s'"#), vec![Piece::Quoted(r#"'it\'s'"#)]);
    }

    #[test]
    fn other_quote_is_inert_inside_string() {
        assert_eq!(pieces(r#""a'b""#), vec![Piece::Quoted(r#""a'b""#)]);
    }

    #[test]
    fn comments_are_discarded() {
        assert_eq!(
            pieces("a/* x; } */b"),
            vec![Piece::Char('a'), Piece::Char('b')]
        );
    }

    #[test]
    fn escapes_outside_strings_are_single_pieces() {
        assert_eq!(
            pieces(r"a\;b"),
            vec![Piece::Char('a'), Piece::Escaped(r"\;"), Piece::Char('b')]
        );
    }

    #[test]
    fn unterminated_string_is_dropped() {
        assert_eq!(pieces("a\"bc;}"), vec![Piece::Char('a')]);
    }

    #[test]
    fn unterminated_comment_is_dropped() {
        assert_eq!(pieces("a/* bc"), vec![Piece::Char('a')]);
    }

    #[test]
    fn removed_comment_cannot_form_new_comment() {
        assert_eq!(
            pieces("//**/*"),
            vec![Piece::Char('/'), Piece::Char(' '), Piece::Char('*')]
        );
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            pieces("é\"ü\""),
            vec![Piece::Char('é'), Piece::Quoted("\"ü\"")]
        );
    }
}
