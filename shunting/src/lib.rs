extern crate lexers;

pub use parser::{Paren, ParseError, RPNExpr, RpnToken, ShuntingParser};

pub mod parser;

pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// Convert `expr` to postfix and evaluate it.
///
/// Division by zero is not an error: it follows IEEE-754 and yields
/// `inf`, `-inf` or `NaN`.
pub fn evaluate(expr: &str) -> Result<f64, Error> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(rpn.eval()?)
}
