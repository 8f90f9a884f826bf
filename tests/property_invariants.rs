use proptest::prelude::*;

use adiflog::{
    core::{document::Document, parser::parse_str},
    field::Field,
    persist::writer::write,
    record::Record,
    types::RecordKind,
};

type RawRecord = (bool, Vec<(String, String)>);

fn field_strategy() -> impl Strategy<Value = (String, String)> {
    ("[A-Z][A-Z0-9_]{0,11}", "[A-Za-z0-9./:-]{0,16}")
}

fn record_strategy() -> impl Strategy<Value = RawRecord> {
    (
        prop::bool::weighted(0.1),
        prop::collection::vec(field_strategy(), 0..8),
    )
}

fn tag(name: &str, data: &str) -> String {
    format!("<{name}:{}>{data}", data.chars().count())
}

fn sentinel(is_header: bool) -> &'static str {
    if is_header { "<eoh>" } else { "<eor>" }
}

fn one_per_line(records: &[RawRecord]) -> String {
    let mut out = String::new();
    for (is_header, fields) in records {
        for (name, data) in fields {
            out.push_str(&tag(name, data));
            out.push('\n');
        }
        out.push_str(sentinel(*is_header));
        out.push('\n');
    }
    out
}

fn packed(records: &[RawRecord]) -> String {
    let mut out = String::new();
    for (is_header, fields) in records {
        for (name, data) in fields {
            out.push_str(&tag(name, data));
            out.push(' ');
        }
        out.push_str(sentinel(*is_header));
        out.push('\n');
    }
    out
}

fn build(records: &[RawRecord]) -> Document {
    records
        .iter()
        .map(|(is_header, fields)| {
            let kind = if *is_header {
                RecordKind::Header
            } else {
                RecordKind::Data
            };
            let mut rec = Record::with_kind(kind);
            for (name, data) in fields {
                rec.push(Field::new(name.as_str(), data.as_str()).expect("name"));
            }
            rec
        })
        .collect()
}

proptest! {
    #[test]
    fn packed_lines_parse_like_one_field_per_line(records in prop::collection::vec(record_strategy(), 0..12)) {
        let spread = parse_str(&one_per_line(&records));
        let packed = parse_str(&packed(&records));
        prop_assert_eq!(&spread, &packed);
        prop_assert_eq!(spread, build(&records));
    }

    #[test]
    fn written_documents_parse_back_unchanged(records in prop::collection::vec(record_strategy(), 0..12)) {
        let doc = build(&records);
        let mut out = Vec::new();
        let written = write(&mut out, &doc).expect("write");
        prop_assert_eq!(written, doc.len());

        let text = String::from_utf8(out).expect("utf8");
        prop_assert_eq!(parse_str(&text), doc);
    }

    #[test]
    fn prose_lines_never_change_the_result(
        records in prop::collection::vec(record_strategy(), 1..8),
        noise in prop::collection::vec("[a-z ,.!]{0,24}", 1..6),
    ) {
        let clean = one_per_line(&records);
        let mut noisy = String::new();
        for (idx, line) in clean.lines().enumerate() {
            noisy.push_str(&noise[idx % noise.len()]);
            noisy.push('\n');
            noisy.push_str(line);
            noisy.push('\n');
        }
        prop_assert_eq!(parse_str(&noisy), parse_str(&clean));
    }

    #[test]
    fn trailing_fields_without_sentinel_are_dropped(
        records in prop::collection::vec(record_strategy(), 0..6),
        tail in prop::collection::vec(field_strategy(), 1..5),
    ) {
        let mut text = one_per_line(&records);
        for (name, data) in &tail {
            text.push_str(&tag(name, data));
            text.push('\n');
        }
        prop_assert_eq!(parse_str(&text), build(&records));
    }
}
