use crate::error::Result;
use crate::processor::process_source;
use crate::source::{Opener, Source};
use crate::stats::SourceResult;
use ccwc_core::{CountConfig, Counts};
use log::{debug, trace, warn};

/// Count every source concurrently and return the results in input order.
///
/// Each source gets its own worker thread, so a source that blocks on open
/// or read only delays its own row. Each task reports `(index, result)` and
/// the collector drops it into that index's slot, so completion order never
/// leaks into the output. An empty `sources` counts standard input as the
/// only, unnamed source.
///
/// Standard input is read by the first `-` only. Later `-` operands find it
/// already drained and count as empty.
///
/// # Errors
///
/// Only if the worker pool cannot be created. Per-source failures are stored
/// on the individual results.
pub fn dispatch<O>(
    sources: &[Source],
    opener: &O,
    config: CountConfig,
) -> Result<Vec<SourceResult>>
where
    O: Opener + ?Sized,
{
    if sources.is_empty() {
        debug!("no operands, reading standard input");
        return Ok(vec![process_source(&Source::ImplicitStdin, opener, config)]);
    }

    let stdin_reader = sources.iter().position(Source::is_stdin);
    debug!("dispatching {} sources", sources.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(sources.len())
        .thread_name(|i| format!("ccwc-worker-{i}"))
        .build()?;

    let (tx, rx) = crossbeam_channel::unbounded();
    pool.scope(|scope| {
        for (index, source) in sources.iter().enumerate() {
            let tx = tx.clone();
            let drained = source.is_stdin() && stdin_reader != Some(index);
            scope.spawn(move |_| {
                let result = if drained {
                    SourceResult::new(source.label().map(Into::into), Counts::new())
                } else {
                    process_source(source, opener, config)
                };
                trace!("source #{index} ({}) done", source.display_name());
                // the receiver outlives the scope
                let _ = tx.send((index, result));
            });
        }
    });
    drop(tx);

    let mut slots: Vec<Option<SourceResult>> =
        std::iter::repeat_with(|| None).take(sources.len()).collect();
    for (index, result) in rx {
        if let Some(err) = &result.error {
            warn!("{err}");
        }
        slots[index] = Some(result);
    }

    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::collections::HashMap;
    use std::io::{self, Cursor, Read};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    /// In-memory sources, each delayed before it is opened.
    struct Fixture {
        files: HashMap<PathBuf, (&'static str, u64)>,
    }

    impl Fixture {
        fn new(entries: &[(&str, &'static str, u64)]) -> Self {
            let files = entries
                .iter()
                .map(|(name, body, delay)| (PathBuf::from(name), (*body, *delay)))
                .collect();
            Self { files }
        }
    }

    impl Opener for Fixture {
        fn open(&self, source: &Source) -> io::Result<Box<dyn Read + Send>> {
            let Source::Path(path) = source else {
                return Err(io::Error::other("stdin not available"));
            };
            let (body, delay) = self
                .files
                .get(path)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            thread::sleep(Duration::from_millis(*delay));
            Ok(Box::new(Cursor::new(body.as_bytes())))
        }
    }

    fn sources(names: &[&str]) -> Vec<Source> {
        names.iter().map(|n| Source::from_operand(*n)).collect()
    }

    fn labels(results: &[SourceResult]) -> Vec<&str> {
        results.iter().map(|r| r.label.as_deref().unwrap()).collect()
    }

    #[test]
    fn order_follows_input_not_completion() {
        let fixture = Fixture::new(&[
            ("slow", "a b c\n", 80),
            ("medium", "d e\n", 40),
            ("fast", "f\n", 0),
        ]);
        for names in [
            ["slow", "medium", "fast"],
            ["fast", "medium", "slow"],
            ["medium", "fast", "slow"],
        ] {
            let results = dispatch(&sources(&names), &fixture, CountConfig::default()).unwrap();
            assert_eq!(labels(&results), names);
        }
    }

    #[test]
    fn counts_land_in_the_right_slot() {
        let fixture = Fixture::new(&[("three", "a b c\n", 30), ("one", "x\n", 0)]);
        let results = dispatch(
            &sources(&["three", "one"]),
            &fixture,
            CountConfig::default(),
        )
        .unwrap();
        assert_eq!(results[0].counts.words, 3);
        assert_eq!(results[1].counts.words, 1);
    }

    #[test]
    fn failing_source_does_not_affect_others() {
        let fixture = Fixture::new(&[("a", "one two\n", 20), ("c", "three\n", 0)]);
        let results = dispatch(
            &sources(&["a", "missing", "c"]),
            &fixture,
            CountConfig::default(),
        )
        .unwrap();
        assert_eq!(labels(&results), ["a", "missing", "c"]);
        assert!(results[0].error.is_none());
        assert!(matches!(results[1].error, Some(EngineError::Open { .. })));
        assert_eq!(results[1].counts, ccwc_core::Counts::default());
        assert_eq!(results[2].counts.words, 1);
    }

    #[test]
    fn single_worker_still_preserves_order() {
        let fixture = Fixture::new(&[("a", "1\n", 10), ("b", "2 2\n", 0), ("c", "", 5)]);
        let results =
            dispatch(&sources(&["c", "b", "a"]), &fixture, CountConfig::default()).unwrap();
        assert_eq!(labels(&results), ["c", "b", "a"]);
        assert_eq!(results[0].counts, ccwc_core::Counts::default());
    }

    #[test]
    fn no_sources_means_implicit_stdin() {
        let fixture = Fixture::new(&[]);
        let results = dispatch(&[], &fixture, CountConfig::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, None);
        assert!(results[0].error.is_some());
    }

    /// Every open waits until all sources have started opening.
    struct Rendezvous(Barrier);

    impl Opener for Rendezvous {
        fn open(&self, _source: &Source) -> io::Result<Box<dyn Read + Send>> {
            self.0.wait();
            Ok(Box::new(Cursor::new(&b"x\n"[..])))
        }
    }

    #[test]
    fn blocked_source_does_not_hold_back_others() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let opener = Arc::new(Rendezvous(Barrier::new(names.len())));
        let (done_tx, done_rx) = crossbeam_channel::bounded(1);

        thread::spawn(move || {
            let results = dispatch(&sources(&names), &*opener, CountConfig::default());
            let _ = done_tx.send(results);
        });

        let results = done_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("every source should get its own task")
            .unwrap();
        assert_eq!(results.len(), names.len());
        assert!(results.iter().all(|r| r.counts.lines == 1));
    }

    /// Serves a fixed body as standard input and counts how often it is opened.
    struct Piped {
        body: Vec<u8>,
        opens: AtomicUsize,
    }

    impl Opener for Piped {
        fn open(&self, source: &Source) -> io::Result<Box<dyn Read + Send>> {
            assert!(source.is_stdin());
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Cursor::new(self.body.clone())))
        }
    }

    #[test]
    fn repeated_dash_reads_stdin_once() {
        let opener = Piped {
            body: "€".repeat(100_000).into_bytes(),
            opens: AtomicUsize::new(0),
        };
        let results = dispatch(
            &[Source::Stdin, Source::Stdin, Source::Stdin],
            &opener,
            CountConfig::default(),
        )
        .unwrap();

        assert_eq!(opener.opens.load(Ordering::SeqCst), 1);
        assert_eq!(labels(&results), ["-", "-", "-"]);
        assert_eq!(results[0].counts.chars, 100_000);
        assert_eq!(results[0].counts.bytes, 300_000);
        assert_eq!(results[1].counts, ccwc_core::Counts::default());
        assert_eq!(results[2].counts, ccwc_core::Counts::default());
        assert!(results.iter().all(|r| r.error.is_none()));
    }
}
