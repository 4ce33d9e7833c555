pub mod csv;
pub mod json;
pub mod report;
pub mod terminal;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use report::ReportWriter;
pub use terminal::TerminalWriter;
