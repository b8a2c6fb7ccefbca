//! Checked primitives: arithmetic, comparison, negation and text output.
//!
//! Spelled names operate on `int32_t`, symbolic names on `uint32_t`. Names that mangle
//! to the same symbol on both surfaces (`not`, `display`, `display_line`, `newline`)
//! share one function.

use std::ffi::c_char;

use crate::display;
use crate::ops::{self, BinOp};
use crate::table::{primitives, OpKind};

primitives! {
    table PRIMITIVES, unchecked = false;

    "add" for [Spelled "add"] => OpKind::Binary(BinOp::Add);
    [] fn add(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Add, a, b)
    }

    "sub" for [Spelled "sub"] => OpKind::Binary(BinOp::Sub);
    [] fn sub(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Sub, a, b)
    }

    "mul" for [Spelled "mul"] => OpKind::Binary(BinOp::Mul);
    [] fn mul(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Mul, a, b)
    }

    /// Aborts the process when `b` is zero.
    ///
    /// `div(i32::MIN, -1)` wraps to `i32::MIN`. Native C division traps there
    /// (`SIGFPE` on x86); this primitive does not.
    "div" for [Spelled "div"] => OpKind::Binary(BinOp::Div);
    [] fn div(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Div, a, ops::divisor(b))
    }

    /// Aborts the process when `b` is zero. `remainder(i32::MIN, -1)` is 0.
    "remainder" for [Spelled "remainder"] => OpKind::Binary(BinOp::Rem);
    [] fn remainder(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Rem, a, ops::divisor(b))
    }

    "lt" for [Spelled "lt"] => OpKind::Binary(BinOp::Lt);
    [] fn lt(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Lt, a, b)
    }

    "gt" for [Spelled "gt"] => OpKind::Binary(BinOp::Gt);
    [] fn gt(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Gt, a, b)
    }

    "eql" for [Spelled "eql"] => OpKind::Binary(BinOp::Eql);
    [] fn eql(a: i32, b: i32) -> i32 {
        ops::binary(BinOp::Eql, a, b)
    }

    "_43" for [Symbolic "+"] => OpKind::Binary(BinOp::Add);
    [] fn add_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Add, x, y)
    }

    "_" for [Symbolic "-"] => OpKind::Binary(BinOp::Sub);
    [] fn sub_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Sub, x, y)
    }

    "_42" for [Symbolic "*"] => OpKind::Binary(BinOp::Mul);
    [] fn mul_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Mul, x, y)
    }

    /// Aborts the process when `y` is zero.
    "_47" for [Symbolic "/"] => OpKind::Binary(BinOp::Div);
    [] fn div_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Div, x, ops::divisor(y))
    }

    "_60" for [Symbolic "<"] => OpKind::Binary(BinOp::Lt);
    [] fn lt_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Lt, x, y)
    }

    "_62" for [Symbolic ">"] => OpKind::Binary(BinOp::Gt);
    [] fn gt_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Gt, x, y)
    }

    "_61" for [Symbolic "="] => OpKind::Binary(BinOp::Eql);
    [] fn eql_u32(x: u32, y: u32) -> u32 {
        ops::binary(BinOp::Eql, x, y)
    }

    "char_61_63" for [Symbolic "char=?"] => OpKind::CharEql;
    [] fn char_eql(x: c_char, y: c_char) -> i32 {
        ops::truth(x == y)
    }

    "not" for [Spelled "not", Symbolic "not"] => OpKind::Not;
    [] fn not(x: i32) -> i32 {
        ops::not(x)
    }

    /// `s` must be null or a NUL-terminated string.
    "display" for [Spelled "display", Symbolic "display"] => OpKind::Display;
    [unsafe] fn display(s: *const c_char) {
        display::stdout_text(display::c_str_bytes(s));
    }

    /// `s` must be null or a NUL-terminated string.
    "display_line" for [Spelled "display_line", Symbolic "display-line"] => OpKind::DisplayLine;
    [unsafe] fn display_line(s: *const c_char) {
        display::stdout_line(display::c_str_bytes(s));
    }

    "newline" for [Spelled "newline", Symbolic "newline"] => OpKind::Newline;
    [] fn newline() {
        display::stdout_newline();
    }
}
