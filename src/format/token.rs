// ============================================================================
// Template Tokenizer
// Single-pass scanner for the compact format-template language
// ============================================================================

use smallvec::SmallVec;

/// Template alphabet for one quantity domain.
///
/// The minor-component letters `m` and `s` and the fraction letter `f` are
/// shared by every domain; the major letter, the continuous-unit letters and
/// the availability of the `+` sign token differ between angles and times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Major-component letter: `d` for angles, `h` for times.
    pub major: char,
    /// Zero-pad width of the major component (3 for angles, 2 for times).
    pub major_width: usize,
    /// Uppercase continuous-unit letters, e.g. `D`/`R` or `Y`/`W`/`D`/`H`/`M`/`S`.
    pub continuous: &'static [char],
    /// Whether `+` is a sign token in this domain.
    pub signed: bool,
}

impl Grammar {
    fn is_component(&self, c: char) -> bool {
        c == self.major || c == 'm' || c == 's'
    }

    fn is_continuous(&self, c: char) -> bool {
        self.continuous.contains(&c)
    }

    /// Letters a backslash protects from substitution.
    fn is_reserved(&self, c: char) -> bool {
        self.is_component(c)
            || self.is_continuous(c)
            || c == 'f'
            || (self.signed && c == '+')
    }
}

/// Which sexagesimal component a placeholder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor1,
    Minor2,
}

/// One segment of a scanned template.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Verbatim text (including unrecognized letters).
    Literal(&'a str),
    /// A reserved letter protected by a backslash.
    Escaped(char),
    /// The `+` sign token.
    Sign,
    /// An integer component, optionally zero-padded (`0d` / `d`).
    Component { which: Component, padded: bool },
    /// A continuous decimal view rounded to `places` digits (`3Y`, `9D`, `H`).
    Continuous { letter: char, places: u32 },
    /// The first `digits` characters of the fraction string (`3f`).
    Fraction { digits: usize },
}

/// Scans a template into literal and placeholder segments in one pass.
///
/// The scanner resolves escapes up front and never revisits produced
/// segments, so substituted values cannot collide with later tokens the way
/// a sequential find-and-replace chain can.
pub fn tokenize<'a>(template: &'a str, grammar: &Grammar) -> SmallVec<[Token<'a>; 16]> {
    let mut tokens: SmallVec<[Token<'a>; 16]> = SmallVec::new();
    let chars: Vec<(usize, char)> = template.char_indices().collect();

    let mut lit_start: Option<usize> = None;
    let mut i = 0;

    // Closes the current literal run, if any, ending at byte offset `end`.
    macro_rules! flush_literal {
        ($end:expr) => {
            if let Some(start) = lit_start.take() {
                tokens.push(Token::Literal(&template[start..$end]));
            }
        };
    }

    while i < chars.len() {
        let (offset, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, n)| n);

        match c {
            '\\' => match next {
                Some(n) if grammar.is_reserved(n) => {
                    flush_literal!(offset);
                    tokens.push(Token::Escaped(n));
                    i += 2;
                },
                _ => {
                    lit_start.get_or_insert(offset);
                    i += 1;
                },
            },
            '+' if grammar.signed => {
                flush_literal!(offset);
                tokens.push(Token::Sign);
                i += 1;
            },
            '0'..='9' => {
                let digit = c as u32 - '0' as u32;
                match next {
                    Some('f') => {
                        flush_literal!(offset);
                        tokens.push(Token::Fraction {
                            digits: digit as usize,
                        });
                        i += 2;
                    },
                    Some(n) if grammar.is_continuous(n) => {
                        flush_literal!(offset);
                        tokens.push(Token::Continuous {
                            letter: n,
                            places: digit,
                        });
                        i += 2;
                    },
                    Some(n) if digit == 0 && grammar.is_component(n) => {
                        flush_literal!(offset);
                        tokens.push(Token::Component {
                            which: component_of(n, grammar),
                            padded: true,
                        });
                        i += 2;
                    },
                    _ => {
                        lit_start.get_or_insert(offset);
                        i += 1;
                    },
                }
            },
            c if grammar.is_continuous(c) => {
                flush_literal!(offset);
                tokens.push(Token::Continuous {
                    letter: c,
                    places: 0,
                });
                i += 1;
            },
            c if grammar.is_component(c) => {
                flush_literal!(offset);
                tokens.push(Token::Component {
                    which: component_of(c, grammar),
                    padded: false,
                });
                i += 1;
            },
            _ => {
                lit_start.get_or_insert(offset);
                i += 1;
            },
        }
    }

    flush_literal!(template.len());
    tokens
}

fn component_of(c: char, grammar: &Grammar) -> Component {
    if c == grammar.major {
        Component::Major
    } else if c == 'm' {
        Component::Minor1
    } else {
        Component::Minor2
    }
}
