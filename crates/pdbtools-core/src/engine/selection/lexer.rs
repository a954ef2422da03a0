use super::ast::CompareOp;
use crate::engine::error::{SyntaxError, SyntaxErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    And,
    Or,
    Not,
    LeftParenthesis,
    RightParenthesis,
    Operator(CompareOp),
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl TokenKind {
    pub(crate) fn is_connective(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '!')
}

fn classify<'a>(text: &'a str, position: usize) -> Result<Token<'a>, SyntaxError> {
    let kind = match text {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "(" => TokenKind::LeftParenthesis,
        ")" => TokenKind::RightParenthesis,
        _ if text.chars().all(is_operator_char) => match CompareOp::from_symbol(text) {
            Some(op) => TokenKind::Operator(op),
            None => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidOperator,
                    text,
                    position,
                ));
            }
        },
        _ => TokenKind::Word,
    };
    Ok(Token {
        kind,
        text,
        position,
    })
}

/// Splits a selection string into tokens.
///
/// Tokens are separated by whitespace; parentheses always stand alone. Positions
/// are byte offsets into `input`.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(start) = word_start.take() {
                tokens.push(classify(&input[start..i], start)?);
            }
            if c != '(' && c != ')' {
                continue;
            }
            tokens.push(classify(&input[i..i + 1], i)?);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(classify(&input[start..], start)?);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokens = tokenize("  name   CA\tand resnum <= 10 ").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["name", "CA", "and", "resnum", "<=", "10"]);
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 9, 12, 16, 23, 26]);
    }

    #[test]
    fn tokenize_classifies_connectives_and_operators() {
        assert_eq!(
            kinds("not water or beta >= 0.5"),
            vec![
                TokenKind::Not,
                TokenKind::Word,
                TokenKind::Or,
                TokenKind::Word,
                TokenKind::Operator(CompareOp::Ge),
                TokenKind::Word,
            ]
        );
    }

    #[test]
    fn tokenize_connectives_are_case_sensitive() {
        assert_eq!(
            kinds("AND Or not"),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Not]
        );
    }

    #[test]
    fn tokenize_separates_parentheses() {
        assert_eq!(
            kinds("not (water)"),
            vec![
                TokenKind::Not,
                TokenKind::LeftParenthesis,
                TokenKind::Word,
                TokenKind::RightParenthesis,
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown_operators() {
        let error = tokenize("resnum >> 5").unwrap_err();
        assert_eq!(error.kind, SyntaxErrorKind::InvalidOperator);
        assert_eq!(error.token, ">>");
        assert_eq!(error.position, 7);

        assert!(tokenize("beta == 1").is_err());
        assert!(tokenize("beta != 1").is_err());
    }

    #[test]
    fn tokenize_keeps_operators_glued_to_words_as_words() {
        assert_eq!(kinds("resnum<=10"), vec![TokenKind::Word]);
    }

    #[test]
    fn tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n").unwrap().is_empty());
    }
}
