use super::ast::{Category, CompareOp, Comparison, Expression, IntegerField, RealField, TextField};
use super::lexer::{Token, TokenKind, tokenize};
use crate::engine::error::{SyntaxError, SyntaxErrorKind};
use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Integer(IntegerField),
    Real(RealField),
    Text(TextField),
    Category(Category),
}

/// Deepest parenthesis nesting accepted by [`parse`].
pub const MAX_NESTING_DEPTH: usize = 128;

static KEYWORDS: Map<&'static str, Keyword> = phf_map! {
    "index" => Keyword::Integer(IntegerField::Index),
    "resnum" => Keyword::Integer(IntegerField::ResNum),
    "model" => Keyword::Integer(IntegerField::Model),
    "beta" => Keyword::Real(RealField::Beta),
    "occup" => Keyword::Real(RealField::Occupancy),
    "name" => Keyword::Text(TextField::Name),
    "resname" => Keyword::Text(TextField::ResName),
    "chain" => Keyword::Text(TextField::Chain),
    "protein" => Keyword::Category(Category::Protein),
    "water" => Keyword::Category(Category::Water),
};

/// Parses a selection string into an [`Expression`].
///
/// Precedence from lowest to highest is `or`, `and`, `not`, then single predicates
/// and parenthesized groups. A run of clauses joined by the same connective becomes
/// one [`Expression::And`] or [`Expression::Or`] node, and repeated `not`s cancel in
/// pairs, so only parentheses add depth; they may nest [`MAX_NESTING_DEPTH`] levels.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for the first problem found; nothing is recovered.
pub fn parse(input: &str) -> Result<Expression, SyntaxError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptySelection, input, 0));
    }
    let mut parser = Parser {
        tokens,
        current_position: 0,
        input_length: input.len(),
        nesting_depth: 0,
    };
    let expression = parser.parse_or_expression()?;
    if let Some(token) = parser.peek_next_token() {
        let kind = if token.kind == TokenKind::RightParenthesis {
            SyntaxErrorKind::UnbalancedParenthesis
        } else {
            SyntaxErrorKind::UnexpectedToken
        };
        return Err(SyntaxError::new(kind, token.text, token.position));
    }
    Ok(expression)
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current_position: usize,
    input_length: usize,
    nesting_depth: usize,
}

impl<'a> Parser<'a> {
    fn parse_or_expression(&mut self) -> Result<Expression, SyntaxError> {
        let first_expression = self.parse_and_expression()?;
        if !self.next_kind_is(TokenKind::Or) {
            return Ok(first_expression);
        }
        let mut operands = vec![first_expression];
        while self.next_kind_is(TokenKind::Or) {
            self.advance_token_position();
            operands.push(self.parse_and_expression()?);
        }
        Ok(Expression::Or(operands))
    }

    fn parse_and_expression(&mut self) -> Result<Expression, SyntaxError> {
        let first_expression = self.parse_not_expression()?;
        if !self.next_kind_is(TokenKind::And) {
            return Ok(first_expression);
        }
        let mut operands = vec![first_expression];
        while self.next_kind_is(TokenKind::And) {
            self.advance_token_position();
            operands.push(self.parse_not_expression()?);
        }
        Ok(Expression::And(operands))
    }

    fn parse_not_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut negated = false;
        while self.next_kind_is(TokenKind::Not) {
            self.advance_token_position();
            negated = !negated;
        }
        let inner_expression = self.parse_atomic_expression()?;
        Ok(if negated {
            Expression::Not(Box::new(inner_expression))
        } else {
            inner_expression
        })
    }

    fn parse_atomic_expression(&mut self) -> Result<Expression, SyntaxError> {
        let Some(token) = self.advance_token_position() else {
            return Err(self.error_at_end_of_input());
        };
        match token.kind {
            TokenKind::Word => self.parse_predicate(token),
            TokenKind::LeftParenthesis => {
                if self.nesting_depth == MAX_NESTING_DEPTH {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::NestingTooDeep {
                            limit: MAX_NESTING_DEPTH,
                        },
                        token.text,
                        token.position,
                    ));
                }
                self.nesting_depth += 1;
                let inner_expression = self.parse_or_expression()?;
                self.nesting_depth -= 1;
                match self.advance_token_position() {
                    Some(next) if next.kind == TokenKind::RightParenthesis => Ok(inner_expression),
                    Some(next) => Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken,
                        next.text,
                        next.position,
                    )),
                    None => Err(SyntaxError::new(
                        SyntaxErrorKind::UnbalancedParenthesis,
                        token.text,
                        token.position,
                    )),
                }
            }
            TokenKind::And | TokenKind::Or => Err(SyntaxError::new(
                SyntaxErrorKind::DanglingConnective,
                token.text,
                token.position,
            )),
            TokenKind::Not | TokenKind::RightParenthesis | TokenKind::Operator(_) => Err(
                SyntaxError::new(SyntaxErrorKind::UnexpectedToken, token.text, token.position),
            ),
        }
    }

    fn parse_predicate(&mut self, keyword_token: Token<'a>) -> Result<Expression, SyntaxError> {
        let Some(keyword) = KEYWORDS.get(keyword_token.text).copied() else {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnknownKeyword,
                keyword_token.text,
                keyword_token.position,
            ));
        };

        let comparison = match keyword {
            Keyword::Category(category) => return Ok(Expression::Category(category)),
            Keyword::Text(field) => {
                if let Some(operator_token) = self.next_operator_token() {
                    if operator_token.kind != TokenKind::Operator(CompareOp::Eq) {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::IncompatibleOperator {
                                keyword: field.keyword(),
                            },
                            operator_token.text,
                            operator_token.position,
                        ));
                    }
                    self.advance_token_position();
                }
                let value_token = self.expect_value(keyword_token)?;
                Comparison::Text {
                    field,
                    value: value_token.text.to_string(),
                }
            }
            Keyword::Integer(field) => {
                let op = self.parse_optional_operator();
                let value_token = self.expect_value(keyword_token)?;
                let value = value_token
                    .text
                    .parse::<i64>()
                    .map_err(|_| invalid_literal(value_token, "an integer"))?;
                Comparison::Integer { field, op, value }
            }
            Keyword::Real(field) => {
                let op = self.parse_optional_operator();
                let value_token = self.expect_value(keyword_token)?;
                let value = value_token
                    .text
                    .parse::<f64>()
                    .map_err(|_| invalid_literal(value_token, "a real"))?;
                Comparison::Real { field, op, value }
            }
        };
        Ok(Expression::Comparison(comparison))
    }

    /// Consumes an explicit comparison operator if one follows, defaulting to `=`.
    fn parse_optional_operator(&mut self) -> CompareOp {
        match self.next_operator_token() {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) => {
                self.advance_token_position();
                op
            }
            _ => CompareOp::Eq,
        }
    }

    /// Consumes the literal following a keyword or operator.
    fn expect_value(&mut self, keyword_token: Token<'a>) -> Result<Token<'a>, SyntaxError> {
        match self.peek_next_token() {
            Some(token) if token.kind == TokenKind::Word => {
                self.advance_token_position();
                Ok(token)
            }
            Some(token) if matches!(token.kind, TokenKind::Operator(_)) => Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken,
                token.text,
                token.position,
            )),
            Some(token) => Err(SyntaxError::new(
                SyntaxErrorKind::MissingOperand,
                keyword_token.text,
                token.position,
            )),
            None => Err(SyntaxError::new(
                SyntaxErrorKind::MissingOperand,
                keyword_token.text,
                self.input_length,
            )),
        }
    }

    /// Builds the error for running out of tokens where an operand was required.
    fn error_at_end_of_input(&self) -> SyntaxError {
        match self.tokens.last() {
            Some(last) if last.kind.is_connective() => SyntaxError::new(
                SyntaxErrorKind::DanglingConnective,
                last.text,
                last.position,
            ),
            Some(last) if last.kind == TokenKind::LeftParenthesis => SyntaxError::new(
                SyntaxErrorKind::UnbalancedParenthesis,
                last.text,
                last.position,
            ),
            _ => SyntaxError::new(SyntaxErrorKind::EmptySelection, "", self.input_length),
        }
    }

    fn next_operator_token(&self) -> Option<Token<'a>> {
        self.peek_next_token()
            .filter(|token| matches!(token.kind, TokenKind::Operator(_)))
    }

    fn next_kind_is(&self, kind: TokenKind) -> bool {
        self.peek_next_token().is_some_and(|token| token.kind == kind)
    }

    fn peek_next_token(&self) -> Option<Token<'a>> {
        self.tokens.get(self.current_position).copied()
    }

    fn advance_token_position(&mut self) -> Option<Token<'a>> {
        let token = self.peek_next_token();
        if token.is_some() {
            self.current_position += 1;
        }
        token
    }
}

fn invalid_literal(token: Token<'_>, expected: &'static str) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::InvalidLiteral { expected },
        token.text,
        token.position,
    )
}
