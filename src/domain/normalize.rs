//! Trace Normalizer
//!
//! Turns the text of a `function_graph` trace into the dense call grammar:
//! comment lines and lines without a column separator are dropped, the
//! CPU/duration columns before the first `|` are cut off, and all whitespace
//! is removed.

use std::borrow::Cow;

use crate::domain::error::{Error, Result};

/// Exact first line of every `function_graph` trace.
pub const TRACER_MARKER: &str = "# tracer: function_graph";

const COLUMN_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Drop `/* ... */` annotations such as `} /* do_sys_open */` and
    /// trace markers.
    pub strip_annotations: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_annotations: true,
        }
    }
}

/// Normalize trace lines with default options.
pub fn normalize<I, S>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize_with(lines, &NormalizeOptions::default())
}

/// Normalize a whole trace file held in memory.
pub fn normalize_str(raw: &str, options: &NormalizeOptions) -> Result<String> {
    normalize_with(raw.split_inclusive('\n'), options)
}

pub fn normalize_with<I, S>(lines: I, options: &NormalizeOptions) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let first = lines.next();
    let first: &str = match &first {
        Some(line) => line.as_ref(),
        None => "",
    };
    if trim_line_end(first) != TRACER_MARKER {
        return Err(Error::Format {
            first_line: trim_line_end(first).to_string(),
        });
    }

    let mut dense = String::new();
    let mut kept = 0usize;
    for line in lines {
        let line = line.as_ref();
        if line.starts_with('#') {
            continue;
        }
        let Some((_, calls)) = line.split_once(COLUMN_SEPARATOR) else {
            continue;
        };
        let calls = if options.strip_annotations {
            strip_annotations(calls)
        } else {
            Cow::Borrowed(calls)
        };
        dense.extend(calls.chars().filter(|c| !is_blank(*c)));
        kept += 1;
    }

    log::debug!(
        "normalized {} data lines into {} bytes of call grammar",
        kept,
        dense.len()
    );
    Ok(dense)
}

fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Removes every closed `/* ... */` span. An unclosed `/*` stays in place.
fn strip_annotations(segment: &str) -> Cow<'_, str> {
    if !segment.contains("/*") {
        return Cow::Borrowed(segment);
    }
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(start) = rest.find("/*") {
        let Some(len) = rest[start + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + 2 + len + 2..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}
