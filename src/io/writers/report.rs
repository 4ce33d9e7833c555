use crate::io::output::{OutputWriter, ResultsView};
use std::io::Write;

pub const REPORT_TITLE: &str = "Relationship Compatibility Report";

/// Plain-text summary, one line per person
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for ReportWriter<W> {
    fn write_results(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        writeln!(self.writer, "{REPORT_TITLE}")?;
        writeln!(self.writer)?;
        for person in &results.people {
            writeln!(
                self.writer,
                "{}: Hot {:.1}, Crazy {:.1}, Zone: {}",
                person.name,
                person.hot_score(),
                person.crazy_score(),
                person.zone()
            )?;
        }
        Ok(())
    }
}
