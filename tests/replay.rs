use std::{fs, io::BufReader};

use regex::Regex;
use tap_formatters::{
    replay::replay,
    writer::{Cli, Coloring, Variant, WritableString},
    Error, Tap,
};

fn replay_into(format: Variant) -> String {
    let input = fs::File::open("tests/tap/calc.jsonl").unwrap();
    let mut tap = Tap::new(
        WritableString::default(),
        Cli { format, color: Coloring::Never },
    );

    let count = replay(BufReader::new(input), &mut tap).unwrap();

    assert_eq!(count, 18);
    tap.printer().output().as_str().to_owned()
}

fn assert_matches_fixture(output: &str, fixture: &str) {
    // Required to strip out non-deterministic parts of output, so we could
    // compare them well.
    let duration = Regex::new(r"# duration: \d+(\.\d+)? seconds").unwrap();
    let expected =
        fs::read_to_string(format!("tests/tap/{fixture}.tap")).unwrap();

    assert_eq!(
        duration.replace_all(output, ""),
        duration.replace_all(&expected, ""),
    );
}

#[test]
fn replays_every_variant() {
    for (format, fixture) in [
        (Variant::Nested, "nested"),
        (Variant::NestedCompact, "nested-compact"),
        (Variant::Flat, "flat"),
        (Variant::FlatCompact, "flat-compact"),
    ] {
        assert_matches_fixture(&replay_into(format), fixture);
    }
}

#[test]
fn replayed_duration_is_kept() {
    let output = replay_into(Variant::FlatCompact);

    assert!(output.contains("# duration: 0.25 seconds\n"), "{output}");
}

#[test]
fn stops_at_malformed_event() {
    let input = "{\"event\": \"start\", \"count\": 1}\n\
                 {\"event\": \"example_started\"\n\
                 {\"event\": \"dump_summary\", \"example_count\": 1}\n";
    let mut tap = Tap::new(WritableString::default(), Cli::default());

    let err = replay(input.as_bytes(), &mut tap).unwrap_err();

    assert!(matches!(err, Error::Decode { line: 2, .. }), "{err}");
    assert_eq!(
        tap.printer().output().as_str(),
        "TAP version 13\npragma +strict\n",
    );
}
