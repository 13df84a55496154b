//! Parsing utilities

/// Implement [`std::str::FromStr`] using parser. Type must have `parse` method implemented.
macro_rules! impl_from_str_via_parser {
    ($t: ident) => {
        impl std::str::FromStr for $t {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $t::parse($crate::parsing::Parser::new(s)) {
                    Some((p, result)) if p.input.is_empty() => Ok(result),
                    Some(_) => Err("Parse error: leftover input"),
                    None => Err("Parse error: parser failed"),
                }
            }
        }
    };
}
pub(crate) use impl_from_str_via_parser;

#[must_use]
#[derive(Debug, Clone, Copy)]
/// `const`-capable string parser
pub struct Parser<'s> {
    /// Remaining unparsed input
    pub input: &'s str,
}

macro_rules! try_option {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}
pub(crate) use try_option;

macro_rules! lexeme {
    ($p:expr, $f:expr) => {{
        let p = $p.trim_whitespace();
        match $f(p) {
            None => None,
            Some((p, val)) => {
                let p = p.trim_whitespace();
                Some((p, val))
            }
        }
    }};
}
pub(crate) use lexeme;

// Both unsigned parsers share the same digit loop, only the accumulator differs
macro_rules! impl_parse_unsigned {
    ($name:ident, $t:ty) => {
        /// Parse unsigned number, failing on overflow
        pub const fn $name(self) -> Option<(Parser<'s>, $t)> {
            let mut bs = self.input.as_bytes();

            let mut parsed_anything = false;
            let mut acc: $t = 0;

            loop {
                match bs {
                    [b @ b'0'..=b'9', rest @ ..] => {
                        parsed_anything = true;
                        acc = try_option!(acc.checked_mul(10));
                        acc = try_option!(acc.checked_add((*b - b'0') as $t));
                        bs = rest;
                    }
                    _ => {
                        if !parsed_anything {
                            return None;
                        }

                        return Some((Parser::from_bytes(bs), acc));
                    }
                }
            }
        }
    };
}

impl<'s> Parser<'s> {
    /// Create new parser marking the beginning of the input
    pub const fn new(input: &'s str) -> Parser<'s> {
        Parser { input }
    }

    // Only ever called with suffixes of valid input split on ascii boundaries
    const fn from_bytes(bs: &'s [u8]) -> Parser<'s> {
        Parser {
            // const-hack
            input: match core::str::from_utf8(bs) {
                Ok(input) => input,
                Err(_) => unreachable!(),
            },
        }
    }

    /// Check if there is no input left
    pub const fn is_empty(self) -> bool {
        self.input.is_empty()
    }

    /// Remove whitespace from the beginning of the input
    pub const fn trim_whitespace(self) -> Parser<'s> {
        let mut bs = self.input.as_bytes();
        loop {
            match bs {
                [b'\t' | b'\n' | b'\r' | b' ', rest @ ..] => bs = rest,
                _ => return Parser::from_bytes(bs),
            }
        }
    }

    /// Parse one ascii char if input is non-empty
    pub const fn parse_any_ascii_char(self) -> Option<(Parser<'s>, char)> {
        match self.input.as_bytes() {
            [b, rest @ ..] if b.is_ascii() => Some((Parser::from_bytes(rest), *b as char)),
            _ => None,
        }
    }

    /// Parse one ascii char if input is non-empty and it matches the `expected`
    pub const fn parse_ascii_char(self, expected: char) -> Option<Parser<'s>> {
        match self.parse_any_ascii_char() {
            Some((p, c)) if c == expected => Some(p),
            _ => None,
        }
    }

    /// Parse exact `expected` string at the beginning of the input
    pub fn parse_str(self, expected: &str) -> Option<Parser<'s>> {
        self.input.strip_prefix(expected).map(Parser::new)
    }

    impl_parse_unsigned!(parse_u32, u32);
    impl_parse_unsigned!(parse_usize, usize);
}
