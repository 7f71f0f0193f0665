#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add, Sub, Mul, Div, Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(char, usize), // offending char, offset in input
    Number(String),
    Op(Operator),
    UnaryMinus,
    OParen, CParen,
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None}
    }

    // chars consumed so far
    pub fn offset(&self) -> usize { self.src.consumed() }

    // when would a minus be unary? we need to know the prev token
    fn makes_unary(prev: &Option<MathToken>) -> bool {
        match *prev {
            Some(MathToken::Number(_)) => false,
            Some(MathToken::CParen) => false,
            _ => true
        }
    }

    fn get_token(&mut self) -> Option<MathToken> {
        let start = self.src.consumed();
        if let Some(num) = self.src.scan_digits() {
            return Some(MathToken::Number(num));
        }
        let token = match self.src.scan_math_op() {
            Some('(') => MathToken::OParen,
            Some(')') => MathToken::CParen,
            Some('-') if Self::makes_unary(&self.prev) => MathToken::UnaryMinus,
            Some(op) => match Operator::from_char(op) {
                Some(op) => MathToken::Op(op),
                None => MathToken::Unknown(op, start),
            },
            None => {
                let c = self.src.next()?;
                self.src.ignore();
                MathToken::Unknown(c, start)
            }
        };
        Some(token)
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if let Some(ref t) = token {
            log::trace!("token {:?} ending at offset {}", t, self.offset());
        }
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{MathToken, MathTokenizer, Operator};

    fn num(n: &str) -> MathToken { MathToken::Number(n.to_string()) }

    #[test]
    fn basic_ops() {
        let mut lx = MathTokenizer::new("3+4*2/(1-5)^2^3".chars());
        let expect = [
            num("3"),
            MathToken::Op(Operator::Add),
            num("4"),
            MathToken::Op(Operator::Mul),
            num("2"),
            MathToken::Op(Operator::Div),
            MathToken::OParen,
            num("1"),
            MathToken::Op(Operator::Sub),
            num("5"),
            MathToken::CParen,
            MathToken::Op(Operator::Pow),
            num("2"),
            MathToken::Op(Operator::Pow),
            num("3"),
        ];
        for exp_token in expect.iter() {
            let token = lx.next().unwrap();
            assert_eq!(*exp_token, token);
        }
        assert_eq!(lx.next(), None);
        assert_eq!(lx.offset(), 15);
    }

    #[test]
    fn multi_digit_numbers() {
        let tokens: Vec<_> = MathTokenizer::new("1234*007".chars()).collect();
        assert_eq!(tokens, vec![num("1234"), MathToken::Op(Operator::Mul), num("007")]);
    }

    #[test]
    fn unary_ops() {
        let tokens: Vec<_> = MathTokenizer::new("-1---(-2)*-3".chars()).collect();
        let expect = vec![
            MathToken::UnaryMinus,
            num("1"),
            MathToken::Op(Operator::Sub),
            MathToken::UnaryMinus,
            MathToken::UnaryMinus,
            MathToken::OParen,
            MathToken::UnaryMinus,
            num("2"),
            MathToken::CParen,
            MathToken::Op(Operator::Mul),
            MathToken::UnaryMinus,
            num("3"),
        ];
        assert_eq!(tokens, expect);
    }

    #[test]
    fn minus_after_cparen_is_binary() {
        let tokens: Vec<_> = MathTokenizer::new("(1)-2".chars()).collect();
        assert_eq!(tokens[3], MathToken::Op(Operator::Sub));
    }

    #[test]
    fn unknown_chars() {
        let tokens: Vec<_> = MathTokenizer::new("12 + x%".chars()).collect();
        let expect = vec![
            num("12"),
            MathToken::Unknown(' ', 2),
            MathToken::Op(Operator::Add),
            MathToken::Unknown(' ', 4),
            MathToken::Unknown('x', 5),
            MathToken::Unknown('%', 6),
        ];
        assert_eq!(tokens, expect);
    }

    #[test]
    fn operator_symbols() {
        for c in "+-*/^".chars() {
            assert_eq!(Operator::from_char(c).map(|op| op.symbol()), Some(c));
        }
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::Pow.to_string(), "^");
    }

    #[test]
    fn empty_input() {
        assert_eq!(MathTokenizer::new("".chars()).next(), None);
    }
}
