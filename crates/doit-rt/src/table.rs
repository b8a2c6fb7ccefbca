//! Descriptors for the exported primitives.
//!
//! The `primitives!` macro is the only place a primitive is declared: one invocation
//! emits both the `extern "C"` functions and the static descriptor slice describing
//! them, so the exported symbols and the published catalog cannot drift apart.

use std::ffi::c_char;
use std::fmt;
use std::str::FromStr;

use crate::ops::BinOp;

/// One of the two public name sets generated code may bind against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {
    /// `add`, `lt`, `display_line`, ...: signed 32-bit arithmetic.
    Spelled,
    /// `+`, `<`, `display-line`, ...: unsigned 32-bit arithmetic.
    Symbolic,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Spelled, Surface::Symbolic];

    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Spelled => "spelled",
            Surface::Symbolic => "symbolic",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SurfaceParseError {
    value: String,
}

impl fmt::Display for SurfaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid surface {:?} (expected one of: spelled, symbolic)",
            self.value
        )
    }
}

impl std::error::Error for SurfaceParseError {}

impl FromStr for Surface {
    type Err = SurfaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spelled" => Ok(Surface::Spelled),
            "symbolic" => Ok(Surface::Symbolic),
            _ => Err(SurfaceParseError {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    pub fn as_str(self) -> &'static str {
        match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
        }
    }
}

/// Native type of a parameter or return value as seen from C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbiType {
    Void,
    I32,
    U32,
    Char,
    /// Signed machine word.
    Word,
    /// Unsigned machine word.
    UWord,
    WordPtr,
    WordPtrMut,
    UWordPtr,
    UWordPtrMut,
    /// NUL-terminated byte string.
    CStr,
}

impl AbiType {
    pub fn c_type(self) -> &'static str {
        match self {
            AbiType::Void => "void",
            AbiType::I32 => "int32_t",
            AbiType::U32 => "uint32_t",
            AbiType::Char => "char",
            AbiType::Word => "intptr_t",
            AbiType::UWord => "uintptr_t",
            AbiType::WordPtr => "const intptr_t *",
            AbiType::WordPtrMut => "intptr_t *",
            AbiType::UWordPtr => "const uintptr_t *",
            AbiType::UWordPtrMut => "uintptr_t *",
            AbiType::CStr => "const char *",
        }
    }

    pub fn signedness(self) -> Option<Signedness> {
        match self {
            AbiType::I32 | AbiType::Word => Some(Signedness::Signed),
            AbiType::U32 | AbiType::UWord => Some(Signedness::Unsigned),
            AbiType::WordPtr | AbiType::WordPtrMut => Some(Signedness::Signed),
            AbiType::UWordPtr | AbiType::UWordPtrMut => Some(Signedness::Unsigned),
            AbiType::Void | AbiType::Char | AbiType::CStr => None,
        }
    }
}

/// Maps a Rust FFI type to its [`AbiType`].
pub trait AbiRepr {
    const ABI: AbiType;
}

macro_rules! abi_repr {
    ($($ty:ty => $abi:ident),* $(,)?) => {
        $(
            impl AbiRepr for $ty {
                const ABI: AbiType = AbiType::$abi;
            }
        )*
    };
}

abi_repr! {
    i32 => I32,
    u32 => U32,
    c_char => Char,
    isize => Word,
    usize => UWord,
    *const isize => WordPtr,
    *mut isize => WordPtrMut,
    *const usize => UWordPtr,
    *mut usize => UWordPtrMut,
    *const c_char => CStr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Binary(BinOp),
    Not,
    CharEql,
    Display,
    DisplayLine,
    Newline,
    Load,
    Store,
}

impl OpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Binary(op) => op.as_str(),
            OpKind::Not => "not",
            OpKind::CharEql => "char_eql",
            OpKind::Display => "display",
            OpKind::DisplayLine => "display_line",
            OpKind::Newline => "newline",
            OpKind::Load => "load",
            OpKind::Store => "store",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: AbiType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub params: &'static [Param],
    pub ret: AbiType,
}

#[derive(Debug)]
pub struct Primitive {
    pub symbol: &'static str,
    /// Source-level names, at most one per surface.
    pub names: &'static [(Surface, &'static str)],
    pub kind: OpKind,
    pub signature: Signature,
    /// Dereferences caller-supplied addresses without any check.
    pub unchecked: bool,
}

impl Primitive {
    pub fn name_on(&self, surface: Surface) -> Option<&'static str> {
        self.names
            .iter()
            .find(|(s, _)| *s == surface)
            .map(|&(_, name)| name)
    }

    /// Signedness of the integer operands, if the primitive has any.
    pub fn signedness(&self) -> Option<Signedness> {
        self.signature.params.iter().find_map(|p| p.ty.signedness())
    }
}

macro_rules! abi_ret {
    () => {
        $crate::table::AbiType::Void
    };
    ($ret:ty) => {
        <$ret as $crate::table::AbiRepr>::ABI
    };
}

pub(crate) use abi_ret;

/// Declares exported primitives and the descriptor table for them.
///
/// ```ignore
/// primitives! {
///     table PRIMITIVES, unchecked = false;
///
///     /// Wrapping signed addition.
///     "add" for [Spelled "add"] => OpKind::Binary(BinOp::Add);
///     [] fn add(a: i32, b: i32) -> i32 { ops::binary(BinOp::Add, a, b) }
/// }
/// ```
///
/// The bracketed qualifier list is spliced before `extern "C"`, so `[unsafe]`
/// declares an `unsafe extern "C" fn`.
macro_rules! primitives {
    (
        table $table:ident, unchecked = $unchecked:literal;
        $(
            $(#[$meta:meta])*
            $symbol:literal for [$($surface:ident $name:literal),+ $(,)?] => $kind:expr;
            [$($qual:tt)*] fn $func:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block
        )*
    ) => {
        $(
            $(#[$meta])*
            #[export_name = $symbol]
            pub $($qual)* extern "C" fn $func($($arg: $ty),*) $(-> $ret)? $body
        )*

        pub static $table: &[$crate::table::Primitive] = &[
            $(
                $crate::table::Primitive {
                    symbol: $symbol,
                    names: &[$(($crate::table::Surface::$surface, $name)),+],
                    kind: $kind,
                    signature: $crate::table::Signature {
                        params: &[$(
                            $crate::table::Param {
                                name: stringify!($arg),
                                ty: <$ty as $crate::table::AbiRepr>::ABI,
                            }
                        ),*],
                        ret: $crate::table::abi_ret!($($ret)?),
                    },
                    unchecked: $unchecked,
                },
            )*
        ];
    };
}

pub(crate) use primitives;
