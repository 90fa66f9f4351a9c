/**
 * Arithmetic CAPTCHA
 *
 * Registration carries a challenge such as `"3 + 4"` and the caller's answer.
 * The challenge is `<int> <op> <int>` with `op` one of `+ - * /`, optional
 * whitespace around the operator and around the whole expression, and
 * nothing else. The answer may be a JSON number or a numeric string.
 *
 * Division is compared exactly as a floating point quotient, so `"7 / 2"`
 * only accepts `3.5`. Division by zero can never be answered, and neither
 * can a challenge whose operand does not fit in an `i64`.
 */

use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptchaError {
    #[error("CAPTCHA is required.")]
    Missing,
    #[error("Invalid CAPTCHA question format.")]
    MalformedChallenge,
    #[error("Incorrect CAPTCHA answer.")]
    IncorrectAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// A parsed `a op b` challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
}

impl Challenge {
    /// The correct answer, or `None` when the challenge is unsolvable
    pub fn solution(&self) -> Option<f64> {
        let (a, b) = (self.left as i128, self.right as i128);
        match self.operator {
            Operator::Add => Some((a + b) as f64),
            Operator::Subtract => Some((a - b) as f64),
            Operator::Multiply => Some((a * b) as f64),
            Operator::Divide if self.right == 0 => None,
            Operator::Divide => Some(self.left as f64 / self.right as f64),
        }
    }
}

impl FromStr for Challenge {
    type Err = CaptchaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let left_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (left, rest) = s.split_at(left_len);
        let rest = rest.trim_start();

        let mut chars = rest.chars();
        let operator = chars
            .next()
            .and_then(Operator::from_char)
            .ok_or(CaptchaError::MalformedChallenge)?;
        let right = chars.as_str().trim_start();

        if left.is_empty() || right.is_empty() || !right.chars().all(|c| c.is_ascii_digit()) {
            return Err(CaptchaError::MalformedChallenge);
        }

        // Well-formed from here on; an operand past i64 cannot be answered
        Ok(Self {
            left: left.parse().map_err(|_| CaptchaError::IncorrectAnswer)?,
            operator,
            right: right.parse().map_err(|_| CaptchaError::IncorrectAnswer)?,
        })
    }
}

/// Numeric value of an answer, mirroring loose JSON-number coercion:
/// numbers as-is, numeric strings parsed (blank means 0), booleans as 0/1,
/// null as 0. Anything unparsable has no value.
pub fn coerce_answer(answer: &Value) -> Option<f64> {
    let value = match answer {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    (!value.is_nan()).then_some(value)
}

/// Check `answer` against `question`
pub fn verify(question: Option<&str>, answer: Option<&Value>) -> Result<(), CaptchaError> {
    let (question, answer) = match (question, answer) {
        (Some(q), Some(a)) if !q.is_empty() => (q, a),
        _ => return Err(CaptchaError::Missing),
    };

    let challenge: Challenge = question.parse()?;
    let expected = challenge.solution().ok_or(CaptchaError::IncorrectAnswer)?;

    match coerce_answer(answer) {
        Some(given) if given == expected => Ok(()),
        _ => Err(CaptchaError::IncorrectAnswer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(question: &str, answer: Value) -> Result<(), CaptchaError> {
        verify(Some(question), Some(&answer))
    }

    #[test]
    fn test_parse_challenge() {
        let challenge: Challenge = "3 + 4".parse().unwrap();
        assert_eq!(challenge, Challenge { left: 3, operator: Operator::Add, right: 4 });

        let challenge: Challenge = "12*3".parse().unwrap();
        assert_eq!(challenge.operator, Operator::Multiply);

        let challenge: Challenge = "  9 /  3 ".parse().unwrap();
        assert_eq!(challenge.right, 3);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "3 +", "+ 4", "3 + 4 + 5", "3 % 4", "three + 4", "-3 + 4", "3 + -4", "3.5 + 1", "3 + 4x"] {
            assert_eq!(bad.parse::<Challenge>(), Err(CaptchaError::MalformedChallenge), "{bad:?}");
        }
    }

    #[test]
    fn test_accepts_correct_answers() {
        assert_eq!(check("3 + 4", json!(7)), Ok(()));
        assert_eq!(check("3 + 4", json!("7")), Ok(()));
        assert_eq!(check("10 - 12", json!(-2)), Ok(()));
        assert_eq!(check("6 * 7", json!(" 42 ")), Ok(()));
        assert_eq!(check("8 / 2", json!(4)), Ok(()));
    }

    #[test]
    fn test_rejects_wrong_answers() {
        assert_eq!(check("3 + 4", json!(8)), Err(CaptchaError::IncorrectAnswer));
        assert_eq!(check("3 + 4", json!("seven")), Err(CaptchaError::IncorrectAnswer));
        assert_eq!(check("3 + 4", json!([7])), Err(CaptchaError::IncorrectAnswer));
    }

    #[test]
    fn test_division_requires_exact_quotient() {
        assert_eq!(check("7 / 2", json!(3.5)), Ok(()));
        assert_eq!(check("7 / 2", json!(3)), Err(CaptchaError::IncorrectAnswer));
        assert_eq!(check("7 / 2", json!(4)), Err(CaptchaError::IncorrectAnswer));
        assert_eq!(check("1 / 3", json!(1.0 / 3.0)), Ok(()));
        assert_eq!(check("1 / 3", json!("0.33")), Err(CaptchaError::IncorrectAnswer));
    }

    #[test]
    fn test_division_by_zero_always_fails() {
        assert_eq!(check("5 / 0", json!(0)), Err(CaptchaError::IncorrectAnswer));
        assert_eq!(check("0 / 0", json!("NaN")), Err(CaptchaError::IncorrectAnswer));
    }

    #[test]
    fn test_oversized_operand_is_incorrect_not_malformed() {
        assert_eq!(
            "99999999999999999999 + 1".parse::<Challenge>(),
            Err(CaptchaError::IncorrectAnswer)
        );
        assert_eq!(
            check("1 * 99999999999999999999", json!(0)),
            Err(CaptchaError::IncorrectAnswer)
        );
        assert_eq!(
            "99999999999999999999 % 1".parse::<Challenge>(),
            Err(CaptchaError::MalformedChallenge)
        );
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(verify(None, Some(&json!(7))), Err(CaptchaError::Missing));
        assert_eq!(verify(Some(""), Some(&json!(7))), Err(CaptchaError::Missing));
        assert_eq!(verify(Some("3 + 4"), None), Err(CaptchaError::Missing));
    }

    #[test]
    fn test_coerce_answer() {
        assert_eq!(coerce_answer(&json!("")), Some(0.0));
        assert_eq!(coerce_answer(&json!(null)), Some(0.0));
        assert_eq!(coerce_answer(&json!(true)), Some(1.0));
        assert_eq!(coerce_answer(&json!("2.5")), Some(2.5));
        assert_eq!(coerce_answer(&json!("abc")), None);
        assert_eq!(coerce_answer(&json!({})), None);
    }
}
