//! Text rendering.
//!
//! Elements are printed like C's `%9.4g`: four significant digits, trailing
//! zeros dropped, scientific notation for very small or large magnitudes,
//! right-aligned in a nine-character field.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::traits::FloatScalar;

use super::vector::Vector;
use super::Matrix;

const WIDTH: usize = 9;
const PRECISION: usize = 4;

/// `%.<prec>g` rendering of `x`.
pub(crate) fn format_g(x: f64, prec: usize) -> String {
    if x.is_nan() {
        return String::from("nan");
    }
    if x.is_infinite() {
        return String::from(if x > 0.0 { "inf" } else { "-inf" });
    }
    if x == 0.0 {
        return String::from(if x.is_sign_negative() { "-0" } else { "0" });
    }

    let p = prec.max(1);
    let sci = format!("{:.*e}", p - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        let fixed = format!("{:.*}", decimals, x);
        String::from(strip_zeros(&fixed))
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

struct Cell(f64);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>width$}", format_g(self.0, PRECISION), width = WIDTH)
    }
}

fn cell<T: FloatScalar>(x: T) -> Cell {
    Cell(x.to_f64().unwrap_or(f64::NAN))
}

/// `[ v0 v1 ... vn ]`
impl<T: FloatScalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for x in self.as_slice() {
            write!(f, "{} ", cell(*x))?;
        }
        write!(f, "]")
    }
}

/// One `| a b c |` line per row.
impl<T: FloatScalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| ")?;
            for x in self.row_slice(i) {
                write!(f, "{} ", cell(*x))?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Write the vector followed by a newline to `out`.
    pub fn print_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        writeln!(out, "{}", self)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Write the matrix, one newline-terminated line per row, to `out`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 0.5, -2.0, 1e6]);
    /// let mut s = String::new();
    /// m.print_to(&mut s).unwrap();
    /// assert_eq!(s, "|         1       0.5 |\n|        -2     1e+06 |\n");
    /// ```
    pub fn print_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        if self.nrows() == 0 {
            return Ok(());
        }
        writeln!(out, "{}", self)
    }
}
