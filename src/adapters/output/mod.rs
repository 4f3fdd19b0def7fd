//! Report sinks. Implement ReportSink.

pub mod console;
pub mod json_lines;
pub mod memory;

pub use console::ConsoleSink;
pub use json_lines::JsonLinesSink;
pub use memory::MemorySink;
