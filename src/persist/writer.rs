use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{core::document::Document, record::Record};

use super::{PersistError, PersistResult};

/// Writes every record of `doc` to `sink`. Returns how many were written.
pub fn write<W: Write>(sink: W, doc: &Document) -> PersistResult<usize> {
    write_selected(sink, doc, |_| true)
}

/// Writes headers plus the data records for which `keep` returns true.
pub fn write_filtered<W, P>(sink: W, doc: &Document, keep: P) -> PersistResult<usize>
where
    W: Write,
    P: Fn(&Record) -> bool,
{
    write_selected(sink, doc, keep)
}

/// Creates (or truncates) `path` and writes `doc` into it.
pub fn write_path(path: impl AsRef<Path>, doc: &Document) -> PersistResult<usize> {
    write_path_filtered(path, doc, |_| true)
}

/// [`write_path`] with a record filter; headers are always kept.
pub fn write_path_filtered<P>(path: impl AsRef<Path>, doc: &Document, keep: P) -> PersistResult<usize>
where
    P: Fn(&Record) -> bool,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PersistError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_selected(BufWriter::new(file), doc, keep)
}

fn write_selected<W, P>(mut sink: W, doc: &Document, keep: P) -> PersistResult<usize>
where
    W: Write,
    P: Fn(&Record) -> bool,
{
    let mut count = 0usize;
    for rec in doc {
        if !rec.is_header() && !keep(rec) {
            continue;
        }
        sink.write_all(rec.render().as_bytes())
            .map_err(PersistError::Write)?;
        sink.write_all(b"\n").map_err(PersistError::Write)?;
        count += 1;
    }
    sink.flush().map_err(PersistError::Write)?;

    debug!(skipped = doc.len() - count, "filtered records");
    info!(count, "wrote records");
    Ok(count)
}
