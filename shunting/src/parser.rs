use lexers::{MathToken, MathTokenizer, Operator};
use std::fmt;
use std::ops::Deref;

pub fn precedence(op: &Operator) -> usize {
    // Every operator pops equal precedence from the stack, so '^' groups
    // left to right too: 2^3^2 == (2^3)^2.
    match *op {
        Operator::Add | Operator::Sub => 1,
        Operator::Mul | Operator::Div => 2,
        Operator::Pow => 3,
    }
}

// the paren left without a partner
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paren {
    Open,
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Paren::Open => write!(f, "'('"),
            Paren::Close => write!(f, "')'"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unrecognized character {character:?} at offset {position}")]
    UnrecognizedCharacter { character: char, position: usize },
    #[error("unbalanced parenthesis: unmatched {0}")]
    UnbalancedParenthesis(Paren),
}

#[derive(Clone, PartialEq, Debug)]
pub enum RpnToken {
    Number(String),
    Op(Operator),
}

#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(Vec<RpnToken>);

impl RPNExpr {
    /// Wrap an already ordered postfix sequence. Nothing is checked here,
    /// malformed sequences are rejected by `eval`.
    pub fn from_tokens(tokens: Vec<RpnToken>) -> Self {
        RPNExpr(tokens)
    }
}

impl Deref for RPNExpr {
    type Target = [RpnToken];
    fn deref(&self) -> &[RpnToken] { &self.0 }
}

// stack entries, parens only live here and never reach the output
enum Pending {
    OParen,
    Op(Operator),
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut MathTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = MathToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                MathToken::Number(num) => out.push(RpnToken::Number(num)),
                MathToken::OParen => stack.push(Pending::OParen),
                MathToken::CParen => loop {
                    match stack.pop() {
                        Some(Pending::Op(op)) => out.push(RpnToken::Op(op)),
                        Some(Pending::OParen) => break,
                        None => return Err(ParseError::UnbalancedParenthesis(Paren::Close)),
                    }
                },
                MathToken::UnaryMinus => {
                    // -x is rewritten as 0 - x
                    out.push(RpnToken::Number(format!("0")));
                    Self::push_op(Operator::Sub, &mut stack, &mut out);
                }
                MathToken::Op(op) => Self::push_op(op, &mut stack, &mut out),
                MathToken::Unknown(character, position) => {
                    return Err(ParseError::UnrecognizedCharacter { character, position })
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Pending::OParen => return Err(ParseError::UnbalancedParenthesis(Paren::Open)),
                Pending::Op(op) => out.push(RpnToken::Op(op)),
            }
        }
        let rpn = RPNExpr(out);
        log::debug!("postfix: {}", rpn);
        Ok(rpn)
    }

    fn push_op(op: Operator, stack: &mut Vec<Pending>, out: &mut Vec<RpnToken>) {
        let prec_rhs = precedence(&op);
        while let Some(&Pending::Op(top)) = stack.last() {
            let prec_lhs = precedence(&top);
            if prec_lhs < prec_rhs {
                break;
            }
            log::trace!("'{}' pops '{}'", op, top);
            stack.pop();
            out.push(RpnToken::Op(top));
        }
        stack.push(Pending::Op(op));
    }
}
