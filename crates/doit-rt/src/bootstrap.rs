//! Process bootstrap.
//!
//! [`Bootstrap`] owns the generated program's entry procedure and runs it once. With
//! the `entry-main` feature the crate also exports a C `main` that binds the `entry`
//! symbol at link time and hands it to [`Bootstrap`].

use std::ffi::c_int;
use std::io::{self, Write as _};

/// The generated program's entry procedure: no arguments, no result.
pub type EntryFn = unsafe extern "C" fn();

/// Exit status of a program whose entry procedure returned.
pub const EXIT_SUCCESS: c_int = 0;

pub struct Bootstrap {
    entry: EntryFn,
}

impl Bootstrap {
    pub const fn new(entry: EntryFn) -> Self {
        Self { entry }
    }

    /// Calls the entry procedure, flushes stdout and returns the exit status.
    ///
    /// Faults raised inside the entry procedure are not intercepted. Consuming `self`
    /// keeps a bootstrap from running its entry twice.
    pub fn run(self) -> c_int {
        unsafe { (self.entry)() };
        let _ = io::stdout().lock().flush();
        EXIT_SUCCESS
    }
}

#[cfg(feature = "entry-main")]
mod linked {
    use std::ffi::{c_char, c_int};

    use super::Bootstrap;

    extern "C" {
        fn entry();
    }

    #[no_mangle]
    pub extern "C" fn main(_argc: c_int, _argv: *const *const c_char) -> c_int {
        Bootstrap::new(entry).run()
    }
}
