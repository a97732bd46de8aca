use std::{ ffi::OsStr, path::Path };

/// Name of the ORBit IDL compiler, installed without an extension.
pub const IDL_COMPILER: &str = "orbit-idl-2";

/// Kind of file an install target is, judged by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Extension starting with `h` (`.h`, `.hpp`, ...).
    Header,
    /// Extension starting with `c` (`.c`, `.cxx`, ...).
    Source,
    /// `.idl`
    InterfaceDefinition,
    /// Extensionless name ending in [`IDL_COMPILER`].
    IdlCompiler,
    Other,
}

impl Category {
    pub fn of(target: &OsStr) -> Category {
        let name = Path::new(target).file_name().unwrap_or(target).as_encoded_bytes();

        let Some(dot) = name.iter().rposition(|&b| b == b'.') else {
            return if name.ends_with(IDL_COMPILER.as_bytes()) {
                Category::IdlCompiler
            } else {
                Category::Other
            };
        };

        let extension = &name[dot + 1..];
        match extension.first() {
            Some(b'h') => Category::Header,
            Some(b'c') => Category::Source,
            _ if extension == b"idl" => Category::InterfaceDefinition,
            _ => Category::Other,
        }
    }

    /// Only generated sources are worth comparing before install.
    pub fn is_eligible(self) -> bool {
        self != Category::Other
    }
}
