use std::{ env, ffi::OsString, process::ExitCode };

use anyhow::Result;

mod category;
mod compare;
mod config;
mod install;
mod invocation;
mod logging;

use category::Category;
use config::Config;
use install::Installer;
use invocation::CandidatePair;

/// What `main` returns when `execv` fails.
const EXEC_FAILED: u8 = 255;

/// Whether the install target already has the contents about to be installed.
fn already_installed(args: &[OsString], config: &Config) -> bool {
    let Some(target) = args.last() else {
        return false;
    };

    let category = Category::of(target);
    tracing::debug!(?category, file = ?target, "classified install target");
    if !category.is_eligible() {
        return false;
    }

    let Some(pair) = CandidatePair::from_args(args) else {
        return false;
    };

    let outcome = compare::compare(&pair, &config.comparator);
    tracing::debug!(?outcome, source = ?pair.source, destination = ?pair.destination, "compared");
    outcome.is_match()
}

fn run(args: Vec<OsString>) -> Result<ExitCode> {
    let config = Config::default();

    if already_installed(&args, &config) {
        tracing::info!(file = ?args.last(), "unchanged, skipping install");
        return Ok(ExitCode::SUCCESS);
    }

    let installer = Installer::new(config.installer);
    tracing::debug!(program = %installer.program().display(), "handing over to installer");
    match installer.run(&args)? {}
}

fn main() -> ExitCode {
    logging::init();

    match run(env::args_os().skip(1).collect()) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(EXEC_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(comparator: &str) -> Config {
        Config { comparator: OsString::from(comparator), ..Config::default() }
    }

    fn install_args(dir: &TempDir, args: &[&str]) -> Vec<OsString> {
        args.iter()
            .map(|arg| {
                if arg.starts_with('-') || arg.chars().all(|c| c.is_ascii_digit()) {
                    OsString::from(arg)
                } else {
                    dir.path().join(arg).into_os_string()
                }
            })
            .collect()
    }

    #[test]
    fn identical_header_is_already_installed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.h"), "int a;\n").unwrap();
        fs::write(dir.path().join("b.h"), "int a;\n").unwrap();

        let args = install_args(&dir, &["-m", "644", "a.h", "b.h"]);
        assert!(already_installed(&args, &config("true")));
    }

    #[test]
    fn differing_comparison_is_not_installed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.c"), "int a;\n").unwrap();
        fs::write(dir.path().join("bar.c"), "int b;\n").unwrap();

        let args = install_args(&dir, &["foo.c", "bar.c"]);
        assert!(!already_installed(&args, &config("false")));
    }

    #[test]
    fn ineligible_target_is_never_compared() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.txt"), "same\n").unwrap();
        fs::write(dir.path().join("b.txt"), "same\n").unwrap();

        let args = install_args(&dir, &["data.txt", "b.txt"]);
        assert!(!already_installed(&args, &config("true")));
    }

    #[cfg(unix)]
    #[test]
    fn signalled_comparison_is_not_installed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let killed = dir.path().join("killed-cmp");
        fs::write(&killed, "#!/bin/sh\nkill -9 $$\n").unwrap();
        fs::set_permissions(&killed, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(dir.path().join("a.h"), "int a;\n").unwrap();
        fs::write(dir.path().join("b.h"), "int a;\n").unwrap();

        let args = install_args(&dir, &["a.h", "b.h"]);
        assert!(!already_installed(&args, &config(killed.to_str().unwrap())));
    }

    #[test]
    fn no_arguments_means_install() {
        assert!(!already_installed(&[], &config("true")));
    }
}
