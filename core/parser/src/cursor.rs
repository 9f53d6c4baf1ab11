//! FILENAME: core/parser/src/cursor.rs
//! PURPOSE: Character cursor over a raw expression string.
//! CONTEXT: The evaluator reads its input left to right exactly once with a
//! single character of lookahead. There is no separate token stream; the
//! cursor skips whitespace before every comparison, which is all the
//! "lexing" the grammar needs.
//!
//! Positions are character offsets (not byte offsets) so that error
//! positions match what the user typed.

/// Transient parse position over one expression.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Cursor {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Current 0-based character offset. Never exceeds `len()`.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the input in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The lookahead character, if any.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes and returns the lookahead character.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skips whitespace, then consumes `expected` if it is the lookahead.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of ASCII digits with at most one '.'
    /// and returns it. A second '.' is left for the caller.
    pub fn take_number_text(&mut self) -> String {
        let mut text = String::new();
        let mut has_dot = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
            } else if ch == '.' && !has_dot {
                has_dot = true;
                text.push(ch);
            } else {
                break;
            }
            self.pos += 1;
        }

        text
    }
}
