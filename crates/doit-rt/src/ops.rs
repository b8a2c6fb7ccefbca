//! Pure 32-bit integer semantics shared by both surfaces.
//!
//! The spelled surface instantiates these with `i32`, the symbolic one with `u32`.
//! Overflow wraps. [`binary`] panics on division and remainder by zero; the exported
//! primitives pass their divisor through [`divisor`] first, which aborts the process
//! without printing anything.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    Eql,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "sub",
            BinOp::Mul => "mul",
            BinOp::Div => "div",
            BinOp::Rem => "rem",
            BinOp::Lt => "lt",
            BinOp::Gt => "gt",
            BinOp::Eql => "eql",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Gt | BinOp::Eql)
    }
}

pub trait Word32: Copy + Ord {
    const ZERO: Self;
    const FALSE: Self;
    const TRUE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_div(self, rhs: Self) -> Self;
    fn wrapping_rem(self, rhs: Self) -> Self;
}

macro_rules! word32 {
    ($($ty:ty),*) => {
        $(
            impl Word32 for $ty {
                const ZERO: Self = 0;
                const FALSE: Self = 0;
                const TRUE: Self = 1;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$ty>::wrapping_div(self, rhs)
                }

                #[inline]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    <$ty>::wrapping_rem(self, rhs)
                }
            }
        )*
    };
}

word32!(i32, u32);

#[inline]
pub fn truth<T: Word32>(b: bool) -> T {
    if b {
        T::TRUE
    } else {
        T::FALSE
    }
}

/// Returns `b`, or aborts the process when it is zero.
#[inline]
pub fn divisor<T: Word32>(b: T) -> T {
    if b == T::ZERO {
        std::process::abort();
    }
    b
}

/// Evaluates `a op b`. Comparisons yield 1 or 0.
///
/// Division truncates toward zero and the remainder takes the sign of `a`.
/// `i32::MIN / -1` wraps to `i32::MIN`.
#[inline]
pub fn binary<T: Word32>(op: BinOp, a: T, b: T) -> T {
    match op {
        BinOp::Add => a.wrapping_add(b),
        BinOp::Sub => a.wrapping_sub(b),
        BinOp::Mul => a.wrapping_mul(b),
        BinOp::Div => a.wrapping_div(b),
        BinOp::Rem => a.wrapping_rem(b),
        BinOp::Lt => truth(a < b),
        BinOp::Gt => truth(a > b),
        BinOp::Eql => truth(a == b),
    }
}

/// Logical negation: 1 for zero, 0 for anything else.
#[inline]
pub fn not(x: i32) -> i32 {
    truth(x == 0)
}
