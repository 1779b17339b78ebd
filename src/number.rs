//! Representation of numbers.

use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str;

use self::Number::*;


#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, PartialEq)]
pub struct ParseNumberError(String);


impl Number {
    pub fn is_zero(self) -> bool {
        match self {
            Integer(i) => i == 0,
            Float(f) => f == 0.0,
        }
    }

    /// Always a Float; None on a zero divisor.
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(self.float_op(other, |a, b| a / b))
    }

    fn float_op<F: Fn(f64, f64) -> f64>(self, other: Self, op: F) -> Self {
        Float(op(self.into(), other.into()))
    }
}


// Integer arithmetic falls back to Float on overflow; mixed operands promote.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl ops::$trait for Number {
            fn $method(&mut self, other: Self) {
                *self = match (*self, other) {
                    (Integer(a), Integer(b)) => match a.$checked(b) {
                        Some(result) => Integer(result),
                        None => self.float_op(other, |a, b| a $op b),
                    },
                    _ => self.float_op(other, |a, b| a $op b),
                };
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, checked_add, +);
impl_assign_op!(SubAssign, sub_assign, checked_sub, -);
impl_assign_op!(MulAssign, mul_assign, checked_mul, *);

impl ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Integer(i) => i.checked_neg().map_or(Float(-(i as f64)), Integer),
            Float(f) => Float(-f),
        }
    }
}

impl From<Number> for f64 {
    fn from(num: Number) -> f64 {
        match num {
            Integer(i) => i as f64,
            Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Integer(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Float(f)
    }
}

impl Default for Number {
    fn default() -> Self {
        Integer(0)
    }
}

/// Integers and floats compare by numeric value.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            _ => f64::from(*self) == f64::from(*other),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Integer(a), Integer(b)) => a.partial_cmp(b),
            _ => f64::from(*self).partial_cmp(&f64::from(*other)),
        }
    }
}

/// A lexeme containing '.' is a Float; otherwise an Integer, falling back to
/// Float when it does not fit in an i64. Lexemes beyond f64 range are rejected
/// since infinity has no literal form.
impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('.') {
            if let Ok(int) = s.parse::<i64>() {
                return Ok(Integer(int));
            }
        }

        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Float(f)),
            _ => Err(ParseNumberError(s.to_string())),
        }
    }
}

/// Floats always keep a fractional part so they read back as floats.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            Float(ff) => {
                let s = ff.to_string();
                if s.contains('.') || !ff.is_finite() {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{}.0", s)
                }
            }
        }
    }
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid number literal: {}", self.0)
    }
}


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
