use crate::decoder::CodePoints;
use crate::error::EngineError;
use crate::source::{Opener, Source};
use crate::stats::SourceResult;
use ccwc_core::{CountConfig, Counts, Tally};
use std::borrow::Cow;
use std::io::{self, Read};

/// Count everything `reader` yields.
///
/// A read error stops the scan; the counts gathered up to that point are
/// returned alongside it.
pub fn count_reader<R: Read>(reader: R, config: CountConfig) -> (Counts, Option<io::Error>) {
    let mut tally = Tally::new(config);
    for item in CodePoints::new(reader) {
        match item {
            Ok(cp) => tally.push(cp),
            Err(e) => return (tally.finish(), Some(e)),
        }
    }
    (tally.finish(), None)
}

/// Open and count a single source. Never fails: errors are stored on the result.
pub fn process_source<O>(source: &Source, opener: &O, config: CountConfig) -> SourceResult
where
    O: Opener + ?Sized,
{
    let label = source.label().map(Cow::into_owned);

    let reader = match opener.open(source) {
        Ok(reader) => reader,
        Err(e) => {
            return SourceResult::failed(
                label,
                EngineError::Open {
                    name: source.display_name().into_owned(),
                    source: e,
                },
            );
        }
    };

    let (counts, err) = count_reader(reader, config);
    SourceResult {
        label,
        counts,
        error: err.map(|e| EngineError::Read {
            name: source.display_name().into_owned(),
            source: e,
        }),
    }
}
