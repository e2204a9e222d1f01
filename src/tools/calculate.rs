//! Arithmetic calculator tool
//!
//! Evaluates the argument as a plain arithmetic expression: numeric
//! literals, `+ - * /`, unary sign, and parentheses. Nothing else is
//! recognized, so the tool can never reach names, imports, or I/O. Any
//! failure — unknown syntax, division by zero, overflow to a non-finite
//! value — produces the `NaN` sentinel text instead of an error.
//!
//! A hand-written recursive-descent parser is used rather than any
//! general-purpose expression evaluator.

use super::Tool;

/// Sentinel observation for any evaluation failure.
const NAN_SENTINEL: &str = "NaN";

/// The `calculate` tool.
pub struct CalculateTool;

impl Tool for CalculateTool {
    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "Runs a calculation and returns the number"
    }

    fn run(&self, argument: &str) -> String {
        match eval(argument) {
            Some(value) => format_number(value),
            None => NAN_SENTINEL.to_string(),
        }
    }
}

/// Format a result the way the observation protocol expects: whole values
/// print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Evaluate an arithmetic expression. `None` on any failure.
fn eval(expr: &str) -> Option<f64> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        // Trailing garbage after a valid prefix ("2 + 2 extra")
        return None;
    }
    if !value.is_finite() {
        return None;
    }
    Some(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Number(literal.parse().ok()?));
            }
            _ => return None,
        }
    }
    Some(tokens)
}

/// Recursive-descent parser over the token stream.
///
/// Grammar:
/// ```text
/// expression := term   (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ('+' | '-') factor | NUMBER | '(' expression ')'
/// ```
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn expression(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = match op {
                Token::Plus => value + rhs,
                _ => value - rhs,
            };
        }
        Some(value)
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.advance();
            let rhs = self.factor()?;
            value = match op {
                Token::Star => value * rhs,
                _ => {
                    if rhs == 0.0 {
                        return None;
                    }
                    value / rhs
                }
            };
        }
        Some(value)
    }

    fn factor(&mut self) -> Option<f64> {
        match self.advance()? {
            Token::Plus => self.factor(),
            Token::Minus => Some(-self.factor()?),
            Token::Number(n) => Some(n),
            Token::LParen => {
                let value = self.expression()?;
                match self.advance()? {
                    Token::RParen => Some(value),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
