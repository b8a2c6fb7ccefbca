//! Unchecked memory access.
//!
//! These primitives turn an integer supplied by generated code into a pointer and
//! dereference it. Nothing is validated: the caller guarantees the address is live,
//! aligned for a machine word and, for stores, writable. Anything else is undefined
//! behavior. Keep this table separate from [`crate::exports`].

use crate::table::{primitives, OpKind};

/// Reads one `T` from `addr`.
#[inline]
pub unsafe fn load<T: Copy>(addr: *const T) -> T {
    addr.read()
}

/// Writes `value` to `addr` without reading or dropping the previous contents.
#[inline]
pub unsafe fn store<T: Copy>(addr: *mut T, value: T) {
    addr.write(value)
}

primitives! {
    table PRIMITIVES, unchecked = true;

    "peek" for [Spelled "peek"] => OpKind::Load;
    [unsafe] fn peek(addr: *const isize) -> isize {
        load(addr)
    }

    "poke" for [Spelled "poke"] => OpKind::Store;
    [unsafe] fn poke(addr: *mut isize, x: isize) {
        store(addr, x)
    }

    "ref" for [Symbolic "ref"] => OpKind::Load;
    [unsafe] fn ref_word(x: *const usize) -> usize {
        load(x)
    }

    "set_42" for [Symbolic "set*"] => OpKind::Store;
    [unsafe] fn set_word(x: *mut usize, y: usize) {
        store(x, y)
    }
}
