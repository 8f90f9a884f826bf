use std::io::{self, Write};

use tempfile::TempDir;

use adiflog::{
    core::parser::{parse_path, parse_str},
    persist::{
        PersistError,
        writer::{write, write_filtered, write_path, write_path_filtered},
    },
};

const LOG: &str = "\
<ADIF_VER:5>3.1.4 <PROGRAMID:4>LoTW <eoh>
<CALL:5>K1ABC <BAND:3>20m <MY_GRIDSQUARE:6>FN42aa <eor>
<CALL:4>W1AW <BAND:3>40m <MY_GRIDSQUARE:6>EM10bb <eor>
<CALL:3>N0X <BAND:3>15m <eor>
";

struct FailingSink {
    accepted: usize,
    budget: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.accepted += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_then_parse_preserves_records() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("log.adi");

    let doc = parse_str(LOG);
    let written = write_path(&path, &doc).expect("write");
    assert_eq!(written, 4);

    let reparsed = parse_path(&path).expect("reparse");
    assert_eq!(reparsed.len(), doc.len());
    for (a, b) in doc.iter().zip(reparsed.iter()) {
        assert_eq!(a.kind(), b.kind());
        let pa: Vec<_> = a.iter().map(|f| (f.name(), f.data())).collect();
        let pb: Vec<_> = b.iter().map(|f| (f.name(), f.data())).collect();
        assert_eq!(pa, pb);
    }
}

#[test]
fn written_text_has_expected_shape() {
    let doc = parse_str("<eoh>\n<CALL:3>ABC<eor>\n");
    let mut out = Vec::new();
    write(&mut out, &doc).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text, "<eoh>\n\n\n<CALL:3>ABC      <eor>\n");
}

#[test]
fn filter_keeps_headers_and_matching_records() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("fn42.adi");

    let doc = parse_str(LOG);
    let written = write_path_filtered(&path, &doc, |r| {
        r.get("MY_GRIDSQUARE").is_some_and(|g| g.contains("FN42"))
    })
    .expect("write");
    assert_eq!(written, 2);

    let reparsed = parse_path(&path).expect("reparse");
    assert!(reparsed.records()[0].is_header());
    assert_eq!(reparsed.records()[1].get("call"), Some("K1ABC"));
}

#[test]
fn filter_rejecting_everything_still_writes_headers() {
    let doc = parse_str(LOG);
    let mut out = Vec::new();
    let written = write_filtered(&mut out, &doc, |_| false).expect("write");
    assert_eq!(written, 1);
}

#[test]
fn edits_survive_round_trip() {
    let mut doc = parse_str(LOG);
    for rec in doc.iter_mut().filter(|r| !r.is_header()) {
        rec.set("band", "6m").unwrap();
    }

    let mut out = Vec::new();
    write(&mut out, &doc).expect("write");
    let reparsed = parse_str(std::str::from_utf8(&out).expect("utf8"));
    assert!(reparsed.data_records().all(|r| r.get("BAND") == Some("6m")));
    let band = reparsed.records()[1].get_field("band").expect("band");
    assert_eq!(band.declared_length(), 2);
}

#[test]
fn missing_source_is_open_error() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("absent.adi");
    match parse_path(&path) {
        Err(PersistError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn unwritable_destination_is_create_error() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("no_such_dir").join("out.adi");
    let err = write_path(&path, &parse_str(LOG)).expect_err("should fail");
    assert!(matches!(err, PersistError::Create { .. }));
}

#[test]
fn sink_failure_propagates_after_partial_output() {
    let doc = parse_str(LOG);
    let mut sink = FailingSink {
        accepted: 0,
        budget: 60,
    };
    let err = write(&mut sink, &doc).expect_err("should fail");
    assert!(matches!(err, PersistError::Write(_)));
    assert!(sink.accepted > 0);
}
