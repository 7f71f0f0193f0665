#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static MATH_OPS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // scan integers like [0-9]+, no sign, no fraction, no exponent
    pub fn scan_digits(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        Some(self.extract_string())
    }

    // a single operator or parenthesis char
    pub fn scan_math_op(&mut self) -> Option<char> {
        let op = self.accept_any(MATH_OPS)?;
        self.ignore();
        Some(op)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_digits() {
        let tests = vec!["0", "7", "987", "000123", "18446744073709551616"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_digits();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_digits_stops_at_non_digit() {
        let mut s = Scanner::new("42+7".chars());
        assert_eq!(s.scan_digits(), Some(format!("42")));
        assert_eq!(s.scan_digits(), None);
        assert_eq!(s.scan_math_op(), Some('+'));
        assert_eq!(s.scan_digits(), Some(format!("7")));
        assert_eq!(s.scan_digits(), None);
    }

    #[test]
    fn rejects_fractions_and_signs() {
        let mut s = Scanner::new("3.5".chars());
        assert_eq!(s.scan_digits(), Some(format!("3")));
        assert_eq!(s.scan_math_op(), None);
        assert_eq!(s.next(), Some('.'));

        assert_eq!(Scanner::new("-4".chars()).scan_digits(), None);
    }

    #[test]
    fn scan_math_ops() {
        let tests = vec!["+", "-", "*", "/", "^", "(", ")"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_math_op();
            assert_eq!(t.chars().next(), result);
        }
        for t in ["%", "!", ",", " ", "x"].iter() {
            assert_eq!(Scanner::new(t.chars()).scan_math_op(), None);
        }
    }
}
