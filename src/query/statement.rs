//! Statement boundary detection.
//!
//! Counts the SQL statements in a string without parsing them. The scanner
//! understands what SQLite's own completeness check does:
//! - Single-quoted strings, double-quoted, backtick and bracketed identifiers
//! - `--` line comments and `/* */` block comments
//! - `CREATE [TEMP] TRIGGER` bodies, where `;` only ends the statement after `END`
//!
//! Empty statements (stray or trailing semicolons, comment-only text) are not
//! counted.

use std::iter::Peekable;
use std::str::Chars;

/// Returns the number of non-empty statements in `sql`.
pub fn statement_count(sql: &str) -> usize {
    let mut chars = sql.chars().peekable();
    let mut count = 0;
    let mut current = StatementState::default();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}

            '-' if chars.peek() == Some(&'-') => skip_line_comment(&mut chars),

            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block_comment(&mut chars);
            }

            '\'' | '"' | '`' => {
                skip_quoted(&mut chars, c);
                current.other();
            }

            '[' => {
                skip_quoted(&mut chars, ']');
                current.other();
            }

            ';' => {
                if current.ends_at_semicolon() {
                    if current.has_content {
                        count += 1;
                    }
                    current = StatementState::default();
                } else {
                    current.other();
                }
            }

            c if is_word_char(c) => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !is_word_char(next) {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                current.word(word.to_ascii_uppercase());
            }

            _ => current.other(),
        }
    }

    if current.has_content {
        count += 1;
    }
    count
}

/// What the scanner knows about the statement it is inside.
#[derive(Debug, Default)]
struct StatementState {
    has_content: bool,
    /// Up to the first three keywords, for trigger detection.
    leading: Vec<String>,
    in_trigger: bool,
    /// The previous token, if it was a word.
    last_word: Option<String>,
}

impl StatementState {
    fn word(&mut self, word: String) {
        self.has_content = true;

        if self.leading.len() < 3 {
            self.leading.push(word.clone());
            let leading: Vec<&str> = self.leading.iter().map(String::as_str).collect();
            self.in_trigger |= matches!(
                leading[..],
                ["CREATE", "TRIGGER"] | ["CREATE", "TEMP" | "TEMPORARY", "TRIGGER"]
            );
        }

        self.last_word = Some(word);
    }

    fn other(&mut self) {
        self.has_content = true;
        self.last_word = None;
    }

    fn ends_at_semicolon(&self) -> bool {
        !self.in_trigger || self.last_word.as_deref() == Some("END")
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn skip_line_comment(chars: &mut Peekable<Chars<'_>>) {
    for c in chars.by_ref() {
        if c == '\n' {
            break;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'/') {
            chars.next();
            break;
        }
    }
}

/// Skips to the closing quote. A doubled quote is an escaped one.
fn skip_quoted(chars: &mut Peekable<Chars<'_>>, close: char) {
    while let Some(c) = chars.next() {
        if c == close {
            if close != ']' && chars.peek() == Some(&close) {
                chars.next();
                continue;
            }
            break;
        }
    }
}
