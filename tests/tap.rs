use std::{
    fs,
    io::{self, Read as _},
    time::Duration,
};

use regex::Regex;
use tap_formatters::{
    event::{
        Dump, Example, Failure, Group, Message, Pending, Seed, Start, Summary,
    },
    writer::{Cli, Coloring, Variant, WritableString},
    Event, Tap, Writer as _,
};
use tempfile::NamedTempFile;

/// Events of a run with one passed, two failed and one skipped example.
fn calc_run() -> Vec<Event> {
    let calc = Group::new(1_u64, "Calc");
    let dividing = Group::new(2_u64, "when dividing");

    vec![
        Event::Seed(Seed { seed: 1234, used: true }),
        Event::Start(Start { count: 4 }),
        Event::GroupStarted(calc.clone()),
        Event::ExampleStarted,
        Event::ExamplePassed(
            Example::new("adds", "Calc adds")
                .at("./spec/calc_spec.rb:4")
                .within([1_u64]),
        ),
        Event::ExampleStarted,
        Event::failed(
            Example::new("subtracts", "Calc subtracts")
                .at("./spec/calc_spec.rb:8")
                .within([1_u64]),
            Failure::new(
                ["\x1b[31mexpected 2 got 1\x1b[0m"],
                Vec::<String>::new(),
            ),
        ),
        Event::GroupStarted(dividing.clone()),
        Event::ExampleStarted,
        Event::pending(
            Example::new(" by zero ", "Calc when dividing by zero")
                .at("./spec/calc_spec.rb:13")
                .within([2_u64, 1]),
            Pending::skip("not supported"),
        ),
        Event::ExampleStarted,
        Event::failed(
            Example::new("rounds", "Calc when dividing rounds")
                .at("./spec/calc_spec.rb:17")
                .within([2_u64, 1]),
            Failure::new(
                ["expected: 0.33", "", "     got: 0.3333"],
                [
                    "./spec/calc_spec.rb:17:in `block'",
                    "./lib/calc.rb:9:in `div'",
                ],
            ),
        ),
        Event::GroupFinished(dividing),
        Event::GroupFinished(calc),
        Event::StartDump,
        Event::DumpFailures(Dump {
            count: 2,
            formatted: "\nFailures:\n\n  \
                        1) Calc subtracts\n  \
                        2) Calc when dividing rounds"
                .into(),
        }),
        Event::DumpPending(Dump {
            count: 1,
            formatted: "\nPending:\n\n  1) Calc when dividing by zero".into(),
        }),
        Event::DumpSummary(Summary {
            example_count: 4,
            failed_count: 2,
            pending_count: 1,
            duration: Duration::from_micros(12_345),
        }),
    ]
}

fn cli(format: Variant, color: Coloring) -> Cli {
    Cli { format, color }
}

fn render(format: Variant, events: &[Event]) -> String {
    let mut tap = Tap::new(
        WritableString::default(),
        cli(format, Coloring::Never),
    );
    tap.handle_all(events).unwrap();
    tap.printer().output().as_str().to_owned()
}

/// Strips out the non-deterministic duration, so outputs could be compared.
fn mask_duration(output: &str) -> String {
    let duration = Regex::new(r"# duration: \d+(\.\d+)? seconds").unwrap();
    duration
        .replace_all(output, "# duration: <N> seconds")
        .into_owned()
}

fn assert_matches_fixture(output: &str, fixture: &str) {
    let expected =
        fs::read_to_string(format!("tests/tap/{fixture}.tap")).unwrap();

    assert_eq!(mask_duration(output), mask_duration(&expected));
}

#[test]
fn nested() {
    assert_matches_fixture(&render(Variant::Nested, &calc_run()), "nested");
}

#[test]
fn nested_compact() {
    assert_matches_fixture(
        &render(Variant::NestedCompact, &calc_run()),
        "nested-compact",
    );
}

#[test]
fn flat() {
    assert_matches_fixture(&render(Variant::Flat, &calc_run()), "flat");
}

#[test]
fn flat_compact() {
    assert_matches_fixture(
        &render(Variant::FlatCompact, &calc_run()),
        "flat-compact",
    );
}

#[test]
fn duration_is_rendered_in_seconds() {
    let output = render(Variant::Flat, &calc_run());

    assert!(output.contains("# duration: 0.012345 seconds\n"), "{output}");
}

#[test]
fn calc_scenario() {
    let events = [
        Event::Start(Start { count: 2 }),
        Event::GroupStarted(Group::new(1_u64, "Calc")),
        Event::ExampleStarted,
        Event::ExamplePassed(
            Example::new("adds", "Calc adds").within([1_u64]),
        ),
        Event::ExampleStarted,
        Event::failed(
            Example::new("subtracts", "Calc subtracts")
                .at("./spec/calc_spec.rb:7")
                .within([1_u64]),
            Failure::new(["expected 2 got 1"], Vec::<String>::new()),
        ),
        Event::GroupFinished(Group::new(1_u64, "Calc")),
    ];

    assert_eq!(
        render(Variant::Nested, &events),
        "TAP version 13\n\
         pragma +strict\n\
         # test: Calc {\n  \
           ok 1 - adds\n  \
           not ok 2 - subtracts\n    \
             ---\n    \
             location: \"./spec/calc_spec.rb:7\"\n    \
             error: expected 2 got 1\n    \
             ...\n  \
           1..2\n  \
           # tests: 2, passed: 1, failed: 1\n\
         }\n",
    );
}

#[test]
fn top_level_groups_have_own_stats() {
    let mut events = Vec::new();
    for (id, name) in [(1_u64, "first"), (2, "second")] {
        events.extend([
            Event::GroupStarted(Group::new(id, name)),
            Event::ExampleStarted,
            Event::ExamplePassed(
                Example::new("works", "works").within([id]),
            ),
            Event::GroupFinished(Group::new(id, name)),
        ]);
    }

    assert_eq!(
        render(Variant::NestedCompact, &events),
        "# test: first {\n  \
           ok 1 - works\n  \
           1..1\n  \
           # tests: 1, passed: 1\n\
         }\n\
         # test: second {\n  \
           ok 1 - works\n  \
           1..1\n  \
           # tests: 1, passed: 1\n\
         }\n",
    );
}

#[test]
fn empty_run() {
    let events = [
        Event::Seed(Seed { seed: 1, used: true }),
        Event::Start(Start { count: 0 }),
        Event::StartDump,
        Event::DumpSummary(Summary::default()),
    ];

    assert_eq!(
        render(Variant::Nested, &events),
        "TAP version 13\npragma +strict\n1..0\n",
    );
    assert_eq!(
        render(Variant::FlatCompact, &events),
        "TAP version 13\n1..0\n",
    );
}

#[test]
fn pending_directives() {
    let events = [
        Event::ExampleStarted,
        Event::pending(Example::new("a", "X a"), Pending::skip("flaky")),
        Event::ExampleStarted,
        Event::pending(Example::new("b", "X b"), Pending::todo("later")),
    ];

    assert_eq!(
        render(Variant::Flat, &events),
        "ok 1 - X a # SKIP: flaky\nok 2 - X b # TODO: later\n",
    );
}

#[test]
fn bail_out_silences_the_rest() {
    let failure = Message {
        text: "\nAn error occurred while loading ./spec/calc_spec.rb.\n\
               # --- Caused by: ---\n\
               # NameError:\n\
               #   uninitialized constant Calc\n"
            .into(),
        non_example_failure: true,
    };
    let mut events = vec![Event::Message(failure)];
    events.extend(calc_run());

    assert_eq!(
        render(Variant::Nested, &events),
        "TAP version 13\n\
         pragma +strict\n\
         1..0\n\
         Bail out!\n\
         # An error occurred while loading ./spec/calc_spec.rb.\n\
         # --- Caused by: ---\n\
         # NameError:\n\
         # uninitialized constant Calc\n",
    );
    assert_eq!(
        render(Variant::Flat, &events[..1]),
        "TAP version 13\n\
         1..0\n\
         Bail out!\n\
         # An error occurred while loading ./spec/calc_spec.rb.\n\
         # --- Caused by: ---\n\
         # NameError:\n\
         # uninitialized constant Calc\n",
    );
}

#[test]
fn example_messages_are_ignored() {
    let events = [Event::Message(Message {
        text: "Run options: include {:focus=>true}".into(),
        non_example_failure: false,
    })];

    assert_eq!(render(Variant::Nested, &events), "");
}

#[test]
fn colors_terminal_output() {
    let mut tap = Tap::new(
        WritableString::default(),
        cli(Variant::Nested, Coloring::Always),
    );
    tap.handle_all(&calc_run()).unwrap();
    let output = tap.printer().output().as_str();

    assert!(output.contains("\x1b["));
    let uncolored = Regex::new("\x1b\\[(\\d+)(;\\d+)*m").unwrap();
    assert_eq!(
        mask_duration(&uncolored.replace_all(output, "")),
        mask_duration(&fs::read_to_string("tests/tap/nested.tap").unwrap()),
    );
}

#[test]
fn file_output() {
    let mut file = NamedTempFile::new().unwrap();
    let mut tap = Tap::to_file(
        file.reopen().unwrap(),
        WritableString::default(),
        cli(Variant::Flat, Coloring::Always),
    );
    tap.handle_all(&calc_run()).unwrap();

    let mut buffer = String::new();
    file.read_to_string(&mut buffer).unwrap();

    assert!(!buffer.contains('\x1b'));
    let expected = fs::read_to_string("tests/tap/flat.tap").unwrap();
    let (tap_part, _) = expected.split_once("\n\nFailures:").unwrap();
    assert_eq!(
        mask_duration(&buffer),
        mask_duration(&format!("{tap_part}\n")),
    );

    let progress = tap.printer().progress().as_str();
    let uncolored = Regex::new("\x1b\\[(\\d+)(;\\d+)*m").unwrap();
    assert_eq!(
        uncolored.replace_all(progress, ""),
        ".F*F\n\
         \n\
         Failures:\n\
         \n  \
           1) Calc subtracts\n  \
           2) Calc when dividing rounds\n\
         \n\
         Pending:\n\
         \n  \
           1) Calc when dividing by zero\n",
    );
    assert_ne!(uncolored.replace_all(progress, ""), progress);
}

#[test]
fn file_output_without_colors() {
    let file = NamedTempFile::new().unwrap();
    let mut tap = Tap::to_file(
        file.reopen().unwrap(),
        WritableString::default(),
        cli(Variant::NestedCompact, Coloring::Never),
    );
    tap.handle_all(&calc_run()).unwrap();

    let progress = tap.printer().progress().as_str();
    assert!(progress.starts_with(".F*F\n\nFailures:"), "{progress}");
}

#[test]
fn flushes_buffered_file_output_without_summary() {
    let file = NamedTempFile::new().unwrap();
    let mut tap = Tap::to_file(
        io::BufWriter::new(file.reopen().unwrap()),
        WritableString::default(),
        cli(Variant::FlatCompact, Coloring::Never),
    );
    tap.handle_all(&calc_run()[..5]).unwrap();
    tap.flush().unwrap();

    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "TAP version 13\nok 1 - Calc adds\n",
    );
}
