// src/progress.rs
//! Operator-facing status reporting for a conversion run.
//! The library never prints; frontends implement `Progress` to surface lines.

use crate::config::consts::RULE_WIDTH;

/// Console tag attached to every status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Start,
    Ok,
    /// Indented continuation of the previous `[OK]` line.
    Detail,
    /// Row-level problem, recovered.
    Warn,
    /// Run-level problem, not fatal.
    Warning,
    Error,
    Fatal,
    Success,
    Sample,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Start => "[START]",
            Tag::Ok => "[OK]",
            Tag::Detail => "    ",
            Tag::Warn => "[WARN]",
            Tag::Warning => "[WARNING]",
            Tag::Error => "[ERROR]",
            Tag::Fatal => "[FATAL]",
            Tag::Success => "[SUCCESS]",
            Tag::Sample => "[SAMPLE DATA]",
        }
    }

    /// Lines that only show up when the run is verbose.
    pub fn is_chatty(&self) -> bool {
        matches!(self, Tag::Ok | Tag::Detail | Tag::Warn)
    }
}

pub trait Progress {
    /// One tagged status line.
    fn report(&mut self, _tag: Tag, _msg: &str) {}

    /// Horizontal `=` rule framing the start, sample and end of a run.
    fn rule(&mut self) {}

    /// Pre-rendered multi-line block (the sample table).
    fn block(&mut self, _text: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stdout; errors and fatals go to stderr.
pub struct ConsoleProgress {
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self { Self { verbose } }
}

impl Progress for ConsoleProgress {
    fn report(&mut self, tag: Tag, msg: &str) {
        if tag.is_chatty() && !self.verbose { return; }
        match tag {
            Tag::Error | Tag::Fatal => eprintln!("{} {}", tag.label(), msg),
            Tag::Start | Tag::Sample | Tag::Success => println!("\n{} {}", tag.label(), msg),
            _ => println!("{} {}", tag.label(), msg),
        }
    }

    fn rule(&mut self) {
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn block(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps every line in memory. Handy for tests and for embedding.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<(Tag, String)>,
    pub blocks: Vec<String>,
}

impl RecordingProgress {
    pub fn tagged(&self, tag: Tag) -> impl Iterator<Item = &str> {
        self.lines.iter().filter(move |(t, _)| *t == tag).map(|(_, m)| m.as_str())
    }
}

impl Progress for RecordingProgress {
    fn report(&mut self, tag: Tag, msg: &str) {
        self.lines.push((tag, msg.to_string()));
    }
    fn block(&mut self, text: &str) {
        self.blocks.push(text.to_string());
    }
}
