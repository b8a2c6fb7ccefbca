//! Links the staticlib, built with `entry-main`, against small C programs that define
//! `entry`, and runs the result the way generated code is run.
//!
//! Needs a C compiler (`CC`, default `cc`); the tests skip when none is available.

#![cfg(unix)]

use std::ffi::OsString;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

#[cfg(target_os = "macos")]
const NATIVE_LIBS: &[&str] = &["-lSystem", "-lc", "-lm"];
#[cfg(not(target_os = "macos"))]
const NATIVE_LIBS: &[&str] = &["-lgcc_s", "-lutil", "-lrt", "-lpthread", "-lm", "-ldl", "-lc"];

fn work_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("c_link")
}

fn cc() -> Option<OsString> {
    let cc = std::env::var_os("CC").unwrap_or_else(|| OsString::from("cc"));
    let ok = Command::new(&cc)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    ok.then_some(cc)
}

/// Builds `libdoit_rt.a` with the linker-level bootstrap into a private target dir.
fn staticlib() -> &'static Path {
    static LIB: OnceLock<PathBuf> = OnceLock::new();
    LIB.get_or_init(|| {
        let cargo = std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let target_dir = work_dir().join("target");
        let out = Command::new(cargo)
            .args(["build", "--offline", "--quiet", "--lib", "--features", "entry-main"])
            .arg("--manifest-path")
            .arg(&manifest)
            .arg("--target-dir")
            .arg(&target_dir)
            .env_remove("CARGO_TARGET_DIR")
            .output()
            .expect("run cargo build");
        assert!(
            out.status.success(),
            "cargo build --features entry-main failed:\n{}",
            String::from_utf8_lossy(&out.stderr)
        );
        let lib = target_dir.join("debug").join("libdoit_rt.a");
        assert!(lib.is_file(), "missing {}", lib.display());
        lib
    })
}

/// Compiles `source` with the staticlib and runs the program. `None` without a C compiler.
fn link_and_run(name: &str, source: &str) -> Option<Output> {
    let Some(cc) = cc() else {
        eprintln!("skipping {name}: no C compiler");
        return None;
    };
    let lib = staticlib();
    let dir = work_dir().join(name);
    std::fs::create_dir_all(&dir).expect("create work dir");
    let src = dir.join("entry.c");
    let exe = dir.join("program");
    std::fs::write(&src, source).expect("write C source");

    let out = Command::new(cc)
        .arg("-fno-builtin")
        .arg(&src)
        .arg(lib)
        .arg("-o")
        .arg(&exe)
        .args(NATIVE_LIBS)
        .output()
        .expect("run cc");
    assert!(
        out.status.success(),
        "link {name} failed:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    Some(Command::new(&exe).output().expect("run program"))
}

fn describe(out: &Output) -> String {
    format!(
        "status={:?} stdout={:?} stderr={:?}",
        out.status,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

#[test]
fn entry_adds_then_displays() {
    let Some(out) = link_and_run(
        "add_then_display",
        r#"
#include <stdint.h>
#include <stdio.h>

int32_t add(int32_t a, int32_t b);
void display_line(const char *s);

void entry(void) {
    char buf[16];
    snprintf(buf, sizeof buf, "%d", (int)add(2, 3));
    display_line(buf);
}
"#,
    ) else {
        return;
    };
    assert_eq!(out.status.code(), Some(0), "{}", describe(&out));
    assert_eq!(out.stdout, b"5\n", "{}", describe(&out));
}

#[test]
fn entry_uses_both_surfaces_and_raw_memory() {
    let Some(out) = link_and_run(
        "both_surfaces",
        r#"
#include <stdint.h>

int32_t lt(int32_t a, int32_t b);
uint32_t _60(uint32_t x, uint32_t y);
int32_t char_61_63(char x, char y);
int32_t not(int32_t x);
intptr_t peek(const intptr_t *addr);
void poke(intptr_t *addr, intptr_t x);
uintptr_t ref(const uintptr_t *x);
void set_42(uintptr_t *x, uintptr_t y);
void display(const char *s);
void newline(void);

static void bit(int32_t b) { display(b ? "1" : "0"); }

void entry(void) {
    bit(lt(-1, 0));
    bit((int32_t)_60(0xffffffffu, 0));
    bit(char_61_63('a', 'a'));
    bit(not(0));
    newline();

    intptr_t w = 0;
    poke(&w, -5);
    uintptr_t u = 0;
    set_42(&u, 7);
    display(peek(&w) == -5 && ref(&u) == 7 ? "ok" : "bad");
    newline();
}
"#,
    ) else {
        return;
    };
    assert_eq!(out.status.code(), Some(0), "{}", describe(&out));
    assert_eq!(out.stdout, b"1011\nok\n", "{}", describe(&out));
}

#[test]
fn division_by_zero_aborts_after_earlier_output() {
    let Some(out) = link_and_run(
        "divide_by_zero",
        r#"
#include <stdint.h>

int32_t div(int32_t a, int32_t b);
void display_line(const char *s);

void entry(void) {
    volatile int32_t zero = 0;
    display_line("before");
    div(7, zero);
    display_line("after");
}
"#,
    ) else {
        return;
    };
    assert_eq!(out.status.signal(), Some(6), "{}", describe(&out));
    assert_eq!(out.stdout, b"before\n", "{}", describe(&out));
    assert!(out.stderr.is_empty(), "{}", describe(&out));
}
