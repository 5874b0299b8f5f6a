//! Restricted arithmetic evaluator for the terminal's `calc` command.
//!
//! DESIGN
//! ======
//! Input is first stripped to the allowed alphabet (digits, `.`, the four
//! operators, parentheses), then run through a hand-written tokenizer and
//! recursive descent parser. There is deliberately no dynamic evaluation
//! anywhere: the grammar is `expr := term (('+'|'-') term)*`,
//! `term := factor (('*'|'/') factor)*`, `factor := number | '(' expr ')'
//! | '-' factor`.

#[cfg(test)]
#[path = "calc_test.rs"]
mod calc_test;

/// Why an expression failed to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Nothing left after stripping disallowed characters.
    #[error("empty expression")]
    Empty,
    /// The expression does not match the grammar.
    #[error("malformed expression")]
    Malformed,
    /// The result is infinite or NaN (e.g. division by zero).
    #[error("result is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
}

/// Remove every character outside the allowed alphabet.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.'))
        .collect()
}

/// Evaluate a raw `calc` argument string.
///
/// # Errors
///
/// Returns a [`CalcError`] for empty, malformed, or non-finite results.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let cleaned = sanitize(input);
    if cleaned.is_empty() {
        return Err(CalcError::Empty);
    }
    let tokens = tokenize(&cleaned)?;
    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(CalcError::Malformed);
    }
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(value)
}

/// Evaluate and format the way the terminal prints it: `= 10`, trimming a
/// trailing `.0` for integral results, or an `Error:` line.
#[must_use]
pub fn evaluate_line(input: &str) -> String {
    match evaluate(input) {
        Ok(value) => {
            if value.fract() == 0.0 && value.abs() < 1e15 {
                format!("= {}", value as i64)
            } else {
                format!("= {value}")
            }
        }
        Err(e) => format!("Error: {e}"),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::Open,
            ')' => Token::Close,
            '0'..='9' | '.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let literal = &input[start..i];
                let value = literal.parse::<f64>().map_err(|_| CalcError::Malformed)?;
                tokens.push(Token::Number(value));
                continue;
            }
            _ => return Err(CalcError::Malformed),
        };
        tokens.push(token);
        i += 1;
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Token::Plus => value + rhs,
                _ => value - rhs,
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = match op {
                Token::Star => value * rhs,
                _ => value / rhs,
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Open) => {
                let value = self.expr()?;
                match self.advance() {
                    Some(Token::Close) => Ok(value),
                    _ => Err(CalcError::Malformed),
                }
            }
            _ => Err(CalcError::Malformed),
        }
    }
}
