use crate::error::TokenizeError;
use miette::{NamedSource, SourceSpan};
use std::ops::Range;

/// One top-level argument of a style, with whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArg {
    pub text: String,
    /// Byte range of the argument in the full source, whitespace trimmed.
    pub span: Range<usize>,
}

/// An element name and its flat list of raw argument strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedStyle {
    pub name: String,
    pub name_span: Range<usize>,
    pub args: Vec<RawArg>,
}

/// Splits one style expression into its element name and top-level arguments.
///
/// Nested argument lists are kept whole inside their `RawArg`; the parser
/// tokenizes them again, by span, when it recurses.
pub struct Tokenizer<'a> {
    src: &'a NamedSource<String>,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
    end: usize,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizes the whole of `source`.
    pub fn new(source: &'a str, src: &'a NamedSource<String>) -> Self {
        Self::new_in_range(source, src, 0..source.len())
    }

    /// Tokenizes `source[range]`, reporting spans relative to the full `source`.
    pub fn new_in_range(source: &'a str, src: &'a NamedSource<String>, range: Range<usize>) -> Self {
        Self {
            src,
            chars: source[range.clone()].chars().peekable(),
            position: range.start,
            end: range.end,
        }
    }

    pub fn tokenize(mut self) -> Result<TokenizedStyle, TokenizeError> {
        self.skip_whitespace();
        if self.peek() == Some('&') {
            self.advance();
            self.skip_whitespace();
        }

        let name_start = self.position;
        if self.peek().is_none() {
            return Err(TokenizeError::Empty {
                src: self.src.clone(),
                span: (name_start, 0).into(),
            });
        }

        // Whitespace inside a name is dropped, as it is between arguments.
        let mut name = String::new();
        let mut name_end = name_start;
        while let Some(c) = self.peek() {
            if matches!(c, '<' | '(' | '>') {
                break;
            }
            self.advance();
            if !c.is_whitespace() {
                name.push(c);
                name_end = self.position;
            }
        }
        let name_span = name_start..name_end;

        let args = if self.peek() == Some('<') {
            self.read_arguments(&name)?
        } else {
            Vec::new()
        };
        self.finish(&name)?;

        log::trace!("tokenized `{}` into {} argument(s)", name, args.len());
        Ok(TokenizedStyle {
            name,
            name_span,
            args,
        })
    }

    /// Scans `<...>`, splitting on commas at depth 1.
    fn read_arguments(&mut self, name: &str) -> Result<Vec<RawArg>, TokenizeError> {
        let open = self.position;
        self.advance(); // Consume the opening '<'

        let mut args = Vec::new();
        let mut buf = String::new();
        let mut arg_start: Option<usize> = None;
        let mut arg_end = self.position;
        let mut depth: u32 = 1;

        loop {
            let pos = self.position;
            let Some(c) = self.advance() else {
                return Err(TokenizeError::Unterminated {
                    src: self.src.clone(),
                    span: (open, 1).into(),
                    element: name.to_string(),
                });
            };

            match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                '<' => depth += 1,
                '>' => {
                    depth -= 1;
                    if depth == 0 {
                        // `Name<>` has no arguments rather than one empty one.
                        if !(args.is_empty() && buf.is_empty()) {
                            args.push(take_arg(&mut buf, &mut arg_start, arg_end, pos));
                        }
                        break;
                    }
                }
                ',' if depth == 1 => {
                    args.push(take_arg(&mut buf, &mut arg_start, arg_end, pos));
                    continue;
                }
                _ => {}
            }

            arg_start.get_or_insert(pos);
            arg_end = self.position;
            buf.push(c);
        }

        Ok(args)
    }

    /// After the name or the closing `>`, only whitespace and one `()` may remain.
    fn finish(&mut self, name: &str) -> Result<(), TokenizeError> {
        self.skip_whitespace();
        if self.peek() == Some('(') {
            let call_start = self.position;
            self.advance();
            self.skip_whitespace();
            if self.peek() != Some(')') {
                return Err(self.trailing(name, call_start));
            }
            self.advance();
            self.skip_whitespace();
        }

        match self.peek() {
            None => Ok(()),
            Some('>') => Err(TokenizeError::Unbalanced {
                src: self.src.clone(),
                span: (self.position, 1).into(),
                element: name.to_string(),
            }),
            Some(_) => Err(self.trailing(name, self.position)),
        }
    }

    fn trailing(&self, name: &str, from: usize) -> TokenizeError {
        TokenizeError::TrailingCharacters {
            src: self.src.clone(),
            span: SourceSpan::from(from..self.end),
            element: name.to_string(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.position += c.len_utf8();
        }
        c
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

fn take_arg(
    buf: &mut String,
    arg_start: &mut Option<usize>,
    arg_end: usize,
    here: usize,
) -> RawArg {
    let span = match arg_start.take() {
        Some(start) => start..arg_end,
        None => here..here,
    };
    RawArg {
        text: std::mem::take(buf),
        span,
    }
}

/// Tokenizes a standalone style string.
///
/// # Errors
/// Returns a `TokenizeError` for empty, unbalanced, unterminated or trailing input.
pub fn tokenize(text: &str) -> Result<TokenizedStyle, TokenizeError> {
    let src = NamedSource::new("style", text.to_string());
    Tokenizer::new(text, &src).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_texts(style: &TokenizedStyle) -> Vec<&str> {
        style.args.iter().map(|a| a.text.as_str()).collect()
    }

    #[test]
    fn test_terminal_element() {
        let style = tokenize("  &style_charging ").unwrap();
        assert_eq!(style.name, "style_charging");
        assert!(style.args.is_empty());
        assert_eq!(style.name_span, 3..17);
    }

    #[test]
    fn test_whitespace_inside_name_is_dropped() {
        let source = "Audio Flicker <White,Blue>";
        let style = tokenize(source).unwrap();
        assert_eq!(style.name, "AudioFlicker");
        assert_eq!(&source[style.name_span], "Audio Flicker");
    }

    #[test]
    fn test_flat_arguments() {
        let style = tokenize("AudioFlicker<White,Blue>").unwrap();
        assert_eq!(style.name, "AudioFlicker");
        assert_eq!(arg_texts(&style), vec!["White", "Blue"]);
        assert_eq!(style.args[1].span, 19..23);
    }

    #[test]
    fn test_nested_arguments_stay_whole() {
        let style =
            tokenize("StyleNormalPtr<AudioFlicker<Blue,DodgerBlue>,White,300,800>()").unwrap();
        assert_eq!(style.name, "StyleNormalPtr");
        assert_eq!(
            arg_texts(&style),
            vec!["AudioFlicker<Blue,DodgerBlue>", "White", "300", "800"]
        );
    }

    #[test]
    fn test_whitespace_is_stripped_but_spans_kept() {
        let source = "StylePtr< AudioFlicker < White , Blue > >\n( )";
        let style = tokenize(source).unwrap();
        assert_eq!(arg_texts(&style), vec!["AudioFlicker<White,Blue>"]);
        let span = style.args[0].span.clone();
        assert_eq!(&source[span], "AudioFlicker < White , Blue >");
    }

    #[test]
    fn test_empty_argument_list() {
        assert!(tokenize("Sum<>").unwrap().args.is_empty());
        assert_eq!(arg_texts(&tokenize("Sum<,>").unwrap()), vec!["", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(tokenize(""), Err(TokenizeError::Empty { .. })));
        assert!(matches!(tokenize(" \t\n"), Err(TokenizeError::Empty { .. })));
        assert!(matches!(tokenize("&"), Err(TokenizeError::Empty { .. })));
    }

    #[test]
    fn test_unterminated() {
        let err = tokenize("StylePtr<AudioFlicker<White,Blue>()").unwrap_err();
        assert!(matches!(err, TokenizeError::Unterminated { ref element, .. } if element == "StylePtr"));
        assert!(matches!(
            tokenize("Int<5"),
            Err(TokenizeError::Unterminated { .. })
        ));
    }

    #[test]
    fn test_unbalanced() {
        assert!(matches!(
            tokenize("Int<5>>"),
            Err(TokenizeError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_trailing_characters() {
        assert!(matches!(
            tokenize("Int<5>junk"),
            Err(TokenizeError::TrailingCharacters { .. })
        ));
        assert!(matches!(
            tokenize("StylePtr<Blue>(x)"),
            Err(TokenizeError::TrailingCharacters { .. })
        ));
        assert!(tokenize("StylePtr<Blue>()  ").is_ok());
    }

    #[test]
    fn test_range_offsets_are_absolute() {
        let source = "StylePtr<Rgb<1,2,3>>()";
        let src = NamedSource::new("test.style", source.to_string());
        let style = Tokenizer::new_in_range(source, &src, 9..19).tokenize().unwrap();
        assert_eq!(style.name, "Rgb");
        assert_eq!(style.name_span, 9..12);
        assert_eq!(style.args[2].span, 17..18);
    }
}
