//! Call-Tree Parser
//!
//! Reads the dense call grammar produced by the normalizer:
//!
//! ```text
//! Forest := '' | Call Forest
//! Call   := Name '()' Tail
//! Tail   := ';' | '{' Forest '}'
//! ```
//!
//! Blocks are tracked on an explicit stack of open calls, so nesting depth is
//! limited by memory rather than by the native call stack.

use crate::domain::callgraph::{CallNode, Forest};
use crate::domain::error::{Error, ParseErrorReason, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject traces nesting deeper than this. Top-level calls are depth 0.
    pub max_depth: Option<usize>,
}

/// A call whose `{` has been read but not its matching `}`.
struct OpenCall<'a> {
    name: &'a str,
    /// Byte offset of the `{`.
    brace: usize,
    /// Calls that precede this one at the enclosing level.
    siblings: Vec<CallNode>,
}

/// Parse a dense trace with no depth limit.
pub fn parse(trace: &str) -> Result<Forest> {
    parse_with(trace, &ParseOptions::default())
}

pub fn parse_with(trace: &str, options: &ParseOptions) -> Result<Forest> {
    let mut open: Vec<OpenCall<'_>> = Vec::new();
    let mut level: Vec<CallNode> = Vec::new();
    let mut pos = 0;

    while pos < trace.len() {
        if trace[pos..].starts_with('}') {
            let Some(call) = open.pop() else {
                return Err(Error::parse(pos, ParseErrorReason::UnmatchedClose));
            };
            let children = std::mem::replace(&mut level, call.siblings);
            level.push(CallNode::new(call.name, children));
            pos += 1;
            continue;
        }

        let (name, parens) = scan_name(trace, pos)?;
        pos = parens + 2;
        match trace[pos..].chars().next() {
            Some(';') => {
                level.push(CallNode::leaf(name));
                pos += 1;
            }
            Some('{') => {
                if let Some(max_depth) = options.max_depth {
                    if open.len() >= max_depth {
                        return Err(Error::DepthExceeded {
                            max_depth,
                            offset: pos,
                        });
                    }
                }
                open.push(OpenCall {
                    name,
                    brace: pos,
                    siblings: std::mem::take(&mut level),
                });
                pos += 1;
            }
            Some(other) => {
                return Err(Error::parse(pos, ParseErrorReason::UnexpectedTail(other)));
            }
            None => return Err(Error::parse(pos, ParseErrorReason::MissingTail)),
        }
    }

    if let Some(call) = open.last() {
        return Err(Error::parse(call.brace, ParseErrorReason::UnterminatedBlock));
    }
    Ok(Forest::from(level))
}

/// Reads a name starting at `start`; returns it with the offset of its `()`.
fn scan_name(trace: &str, start: usize) -> Result<(&str, usize)> {
    for (i, c) in trace[start..].char_indices() {
        let at = start + i;
        match c {
            '(' => {
                if !trace[at..].starts_with("()") {
                    return Err(Error::parse(at, ParseErrorReason::MissingParens));
                }
                if at == start {
                    return Err(Error::parse(start, ParseErrorReason::EmptyName));
                }
                return Ok((&trace[start..at], at));
            }
            ')' | '{' | '}' | ';' => {
                return Err(Error::parse(at, ParseErrorReason::InvalidNameChar(c)));
            }
            _ => {}
        }
    }
    Err(Error::parse(trace.len(), ParseErrorReason::MissingParens))
}
