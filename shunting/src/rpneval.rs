use crate::parser::{RPNExpr, RpnToken};
use lexers::Operator;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvalErr {
    #[error("operator '{op}' needs 2 operands, found {available}")]
    StackUnderflow { op: Operator, available: usize },
    #[error("expression left {0} values on the stack, expected 1")]
    MalformedExpression(usize),
    #[error("bad number: {0}")]
    BadNumber(String),
}

fn apply(op: Operator, l: f64, r: f64) -> f64 {
    match op {
        Operator::Add => l + r,
        Operator::Sub => l - r,
        Operator::Mul => l * r,
        // IEEE-754: x/0 is +-inf, 0/0 is NaN
        Operator::Div => l / r,
        Operator::Pow => l.powf(r),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                RpnToken::Number(ref num) => match f64::from_str(num) {
                    Ok(n) => operands.push(n),
                    Err(_) => return Err(EvalErr::BadNumber(num.clone())),
                },
                RpnToken::Op(op) => {
                    let available = operands.len();
                    let (r, l) = match (operands.pop(), operands.pop()) {
                        (Some(r), Some(l)) => (r, l),
                        _ => return Err(EvalErr::StackUnderflow { op, available }),
                    };
                    let result = apply(op, l, r);
                    if op == Operator::Div && r == 0.0 {
                        log::debug!("{} / {} is {}", l, r, result);
                    }
                    log::trace!("{} {} {} = {}", l, op, r, result);
                    operands.push(result);
                }
            }
        }
        match operands.len() {
            1 => {
                let result = operands[0];
                log::debug!("{} => {}", self, result);
                Ok(result)
            }
            n => Err(EvalErr::MalformedExpression(n)),
        }
    }
}
