use std::{ ffi::OsString, fs, path::{ Path, PathBuf } };

/// The `install` command lines worth checking before installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `-c SRC DST`
    Copy,
    /// `SRC DST`
    Plain,
    /// `-c -m MODE SRC DST`
    CopyWithMode,
    /// `-m MODE SRC DST`
    WithMode,
}

impl Shape {
    /// Matches the arguments (program name excluded) against the known shapes.
    pub fn recognize(args: &[OsString]) -> Option<Shape> {
        let flag = |index: usize, value: &str| args[index] == value;

        match args.len() {
            3 if flag(0, "-c") && !flag(1, "-d") => Some(Shape::Copy),
            2 if !flag(0, "-d") => Some(Shape::Plain),
            5 if flag(0, "-c") && flag(1, "-m") => Some(Shape::CopyWithMode),
            4 if flag(0, "-m") => Some(Shape::WithMode),
            _ => None,
        }
    }
}

/// Source and destination of the pending install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CandidatePair {
    /// The last two arguments, provided the destination already exists as a
    /// non-directory.
    pub fn from_args(args: &[OsString]) -> Option<CandidatePair> {
        let shape = Shape::recognize(args)?;
        tracing::debug!(?shape, "recognized install command line");

        let [.., source, destination] = args else {
            return None;
        };
        if !is_existing_file(Path::new(destination)) {
            tracing::debug!(destination = ?destination, "destination is missing or a directory");
            return None;
        }

        Some(CandidatePair {
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
        })
    }
}

fn is_existing_file(path: &Path) -> bool {
    fs::metadata(path).map_or(false, |metadata| !metadata.is_dir())
}
