use std::{ convert::Infallible, ffi::OsString, path::{ Path, PathBuf }, process::Command };

use anyhow::{ Context, Result };

/// The real `install` program everything is eventually handed to.
#[derive(Debug, Clone)]
pub struct Installer {
    program: PathBuf,
}

impl Installer {
    pub fn new(program: impl Into<PathBuf>) -> Installer {
        Installer { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The installer command with the arguments forwarded untouched.
    pub fn command(&self, args: &[OsString]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);
        command
    }

    /// Replaces this process with the installer. Only returns if the
    /// installer could not be started.
    #[cfg(unix)]
    pub fn run(&self, args: &[OsString]) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        let err = self.command(args).exec();
        Err(err).with_context(|| format!("failed to execute {}", self.program.display()))
    }

    /// Runs the installer to completion and exits with its exact status.
    #[cfg(not(unix))]
    pub fn run(&self, args: &[OsString]) -> Result<Infallible> {
        let status = self
            .command(args)
            .status()
            .with_context(|| format!("failed to execute {}", self.program.display()))?;
        std::process::exit(exit_code(status))
    }
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
