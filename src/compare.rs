use std::{ ffi::OsStr, fs, process::Command };

use crate::invocation::CandidatePair;

/// Outcome of comparing the pending install's source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    NoMatch,
    /// Something went wrong before a verdict; treated like [`Comparison::NoMatch`].
    Inconclusive,
}

impl Comparison {
    pub fn is_match(self) -> bool {
        self == Comparison::Match
    }
}

/// Compares the pair byte for byte with `tool -s SRC DST`, skipping the tool
/// entirely when sizes already differ.
pub fn compare(pair: &CandidatePair, tool: &OsStr) -> Comparison {
    let sizes = fs::metadata(&pair.destination).and_then(|destination| {
        fs::metadata(&pair.source).map(|source| (source.len(), destination.len()))
    });
    let (source_len, destination_len) = match sizes {
        Ok(sizes) => sizes,
        Err(err) => {
            tracing::debug!("cannot stat {:?}: {}", pair, err);
            return Comparison::Inconclusive;
        }
    };
    if source_len != destination_len {
        return Comparison::NoMatch;
    }

    let status = Command::new(tool)
        .arg("-s")
        .arg(&pair.source)
        .arg(&pair.destination)
        .status();
    match status {
        Ok(status) if status.success() => Comparison::Match,
        Ok(status) if status.code().is_some() => Comparison::NoMatch,
        Ok(status) => {
            tracing::debug!(%status, "comparison tool terminated abnormally");
            Comparison::Inconclusive
        }
        Err(err) => {
            tracing::debug!("failed to run {:?}: {}", tool, err);
            Comparison::Inconclusive
        }
    }
}
