use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use super::{PersistError, PersistResult};

/// Opens `path` for buffered reading.
pub fn open(path: impl AsRef<Path>) -> PersistResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Physical lines of `source` with line endings stripped.
///
/// Invalid UTF-8 surfaces as [`PersistError::Decode`] tagged with its
/// one-based line number; the iterator should not be resumed after an error.
pub fn lines<R: BufRead>(source: R) -> impl Iterator<Item = PersistResult<String>> {
    source.lines().enumerate().map(|(idx, line)| {
        line.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => PersistError::Decode { line: idx + 1 },
            _ => PersistError::Read(err),
        })
    })
}
