// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a run.
/// The CLI prints lines; tests and library callers can pass `NullProgress`.
pub trait Progress {
    /// Called once the listing page is parsed, with the number of municipalities.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called before a municipality's detail page is fetched.
    fn item_started(&mut self, _index: usize, _name: &str) {}

    /// Called after the output file has been written.
    fn finish(&mut self, _out: &Path) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain stdout lines, one per municipality.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Municipalities found: {total}");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_started(&mut self, _index: usize, name: &str) {
        println!("Processing municipality: {name}...");
    }
    fn finish(&mut self, out: &Path) {
        println!("Data saved to: {}", out.display());
    }
}
