// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replaying of JSON-encoded [`Event`]s.
//!
//! Every line of the input is a single JSON object, tagged by its `"event"`
//! field:
//!
//! ```text
//! {"event": "start", "count": 1}
//! {"event": "group_started", "id": 1, "description": "Calc"}
//! {"event": "example_started"}
//! {"event": "example_passed", "description": "adds", "groups": [1]}
//! {"event": "group_finished", "id": 1, "description": "Calc"}
//! {"event": "dump_summary", "example_count": 1, "duration": 0.01}
//! ```

use std::io::BufRead;

use crate::{util, Error, Event, Result, Writer};

/// Decodes a single [`Event`] out of the given JSON `line`.
///
/// # Errors
///
/// If the `line` isn't a valid JSON-encoded [`Event`].
pub fn decode(line: &str) -> serde_json::Result<Event> {
    serde_json::from_str(line)
}

/// Feeds all the [`Event`]s read from the given `reader` into the given
/// [`Writer`], in order.
///
/// Blank lines are skipped. Returns the number of replayed [`Event`]s.
///
/// # Errors
///
/// - If reading from the `reader` fails.
/// - If any line cannot be decoded into an [`Event`] (the preceding ones are
///   already replayed by then).
/// - If the [`Writer`] fails to write or flush its output. The [`Writer`] is
///   flushed even if replaying fails.
pub fn replay<R: BufRead, W: Writer>(reader: R, mut writer: W) -> Result<usize> {
    let replayed = replay_lines(reader, &mut writer);
    let flushed = writer.flush();
    let count = replayed?;
    flushed?;
    tracing::debug!(count, "events replayed");
    Ok(count)
}

/// Feeds the decoded lines of the given `reader` into the given [`Writer`],
/// without flushing it.
fn replay_lines<R: BufRead, W: Writer>(reader: R, writer: &mut W) -> Result<usize> {
    let mut count = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if util::is_blank(&line) {
            continue;
        }

        let event = decode(&line).map_err(|e| Error::decode(n + 1, e))?;
        tracing::trace!(line = n + 1, event = event.name(), "event decoded");
        writer.handle_event(&event)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::event::{
        Example, Failure, FailureKind, Group, GroupId, Pending, Seed, Summary,
    };

    use super::*;

    /// [`Writer`] collecting all the handled [`Event`]s.
    #[derive(Default)]
    struct Collect(Vec<Event>, usize);

    impl Writer for Collect {
        fn handle_event(&mut self, event: &Event) -> std::io::Result<()> {
            self.0.push(event.clone());
            Ok(())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.1 += 1;
            Ok(())
        }
    }

    /// [`Writer`] whose output cannot be flushed.
    struct Unflushable;

    impl Writer for Unflushable {
        fn handle_event(&mut self, _: &Event) -> std::io::Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn decodes_every_event_kind() {
        assert_eq!(
            decode(r#"{"event":"seed","seed":7,"used":true}"#).unwrap(),
            Event::Seed(Seed { seed: 7, used: true }),
        );
        assert_eq!(
            decode(r#"{"event":"start_dump"}"#).unwrap(),
            Event::StartDump,
        );
        assert_eq!(
            decode(r#"{"event":"group_started","id":3,"description":"G"}"#)
                .unwrap(),
            Event::GroupStarted(Group::new(3_u64, "G")),
        );
        assert_eq!(
            decode(
                r#"{"event":"example_pending",
                    "example":{"description":"p","full_description":"G p"},
                    "pending":{"message":"later","skipped":true}}"#,
            )
            .unwrap(),
            Event::pending(Example::new("p", "G p"), Pending::skip("later")),
        );
        assert_eq!(
            decode(
                r#"{"event":"dump_summary","example_count":2,
                    "failed_count":1,"duration":0.25}"#,
            )
            .unwrap(),
            Event::DumpSummary(Summary {
                example_count: 2,
                failed_count: 1,
                pending_count: 0,
                duration: Duration::from_millis(250),
            }),
        );
    }

    #[test]
    fn decodes_aggregate_failures() {
        let event = decode(
            r#"{"event":"example_failed",
                "example":{"description":"a","location":"./a.rb:1",
                           "groups":[2,1]},
                "failure":{"kind":{"type":"aggregate","message":"2 failed"},
                           "backtrace":["x"]}}"#,
        )
        .unwrap();

        let Event::ExampleFailed { example, failure } = event else {
            panic!("unexpected event: {event:?}");
        };
        assert_eq!(example.groups, [GroupId(2), GroupId(1)]);
        assert_eq!(example.location, "./a.rb:1");
        assert_eq!(
            failure.kind,
            FailureKind::Aggregate { message: "2 failed".into() },
        );
        assert_eq!(failure, Failure {
            kind: failure.kind.clone(),
            message_lines: vec![],
            backtrace: vec!["x".into()],
        });
    }

    #[test]
    fn skips_blank_lines() {
        let input = "\n{\"event\":\"example_started\"}\n   \n                     {\"event\":\"start_dump\"}\n";
        let mut collected = Collect::default();

        let count = replay(input.as_bytes(), &mut collected).unwrap();

        assert_eq!(count, 2);
        assert_eq!(collected.0, [Event::ExampleStarted, Event::StartDump]);
    }

    #[test]
    fn reports_offending_line() {
        let input = "{\"event\":\"example_started\"}\n\n{\"event\":\"nope\"}\n";
        let mut collected = Collect::default();

        let err = replay(input.as_bytes(), &mut collected).unwrap_err();

        assert!(matches!(err, Error::Decode { line: 3, .. }), "{err}");
        assert_eq!(collected.0, [Event::ExampleStarted]);
        assert_eq!(collected.1, 1, "flushed despite decode failure");
    }

    #[test]
    fn propagates_flush_failure() {
        let input = "{\"event\":\"example_started\"}\n";

        let err = replay(input.as_bytes(), Unflushable).unwrap_err();

        assert!(err.is_io_error(), "{err}");
        assert_eq!(err.to_string(), "I/O operation failed: disk full");
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(decode(r#"{"event":"dump_summary","duration":-1.0}"#).is_err());
    }
}
