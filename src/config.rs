use std::{ ffi::OsString, path::PathBuf };

/// Installer path, fixed at build time by `INSTALL_CHECK_INSTALL`.
pub const INSTALLER: &str = match option_env!("INSTALL_CHECK_INSTALL") {
    Some(path) => path,
    None => "/usr/bin/install",
};

/// Byte comparison tool, fixed at build time by `INSTALL_CHECK_CMP`.
pub const COMPARATOR: &str = match option_env!("INSTALL_CHECK_CMP") {
    Some(tool) => tool,
    None => "cmp",
};

/// Where the external collaborators live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub installer: PathBuf,
    pub comparator: OsString,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            installer: PathBuf::from(INSTALLER),
            comparator: OsString::from(COMPARATOR),
        }
    }
}
