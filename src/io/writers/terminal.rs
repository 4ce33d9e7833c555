use crate::core::{Category, Person};
use crate::formatting::{zone_color, FormattingConfig};
use crate::io::output::{OutputWriter, ResultsView};
use crate::zones::Zone;
use colored::*;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const PLAIN_RULE: &str = "===========================================";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        formatting.apply();
        Self { writer, formatting }
    }

    fn rule(&self) -> &'static str {
        if self.formatting.emoji.should_use_emoji() {
            RULE
        } else {
            PLAIN_RULE
        }
    }

    fn write_header(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        let total = results.insights.total_people;
        let rule = self.formatting.header(self.rule());
        writeln!(self.writer)?;
        writeln!(self.writer, "{rule}")?;
        writeln!(
            self.writer,
            "{}",
            self.formatting.header("        COMPATIBILITY RESULTS")
        )?;
        writeln!(self.writer, "{rule}")?;
        writeln!(
            self.writer,
            "Analysis of {} {} across {} criteria",
            total,
            if total == 1 { "person" } else { "people" },
            results.criteria.len()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_criteria(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatting.marker("📋", "*"),
            "CRITERIA".bold()
        )?;
        for category in Category::ALL {
            let listed: Vec<String> = results
                .criteria
                .iter()
                .filter(|c| c.category == category)
                .map(|c| format!("{} {:.0}%", c.name, c.weight * 100.0))
                .collect();
            let listed = if listed.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                listed.join(", ")
            };
            writeln!(self.writer, "  {:<6} {}", format!("{category}:"), listed)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.formatting.emoji.should_use_emoji() {
                UTF8_FULL
            } else {
                ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.formatting.use_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn zone_cell(&self, zone: Zone) -> Cell {
        let cell = Cell::new(zone.label());
        if self.formatting.use_color() {
            cell.fg(table_color(zone_color(zone)))
        } else {
            cell
        }
    }

    fn write_people(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        if let Some(zone) = results.zone_filter {
            writeln!(self.writer, "Showing only {}", self.formatting.zone(zone))?;
        }
        if results.people.is_empty() {
            writeln!(self.writer, "{}", "No people to show.".dimmed())?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = self.new_table();
        table.set_header(vec!["Name", "Hot", "Crazy", "Zone"]);
        for person in &results.people {
            table.add_row(vec![
                Cell::new(&person.name),
                Cell::new(format!("{:.1}", person.hot_score()))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}", person.crazy_score()))
                    .set_alignment(CellAlignment::Right),
                self.zone_cell(person.zone()),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        if results.insights.distribution.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            "{} {}",
            self.formatting.marker("📊", "#"),
            "ZONE DISTRIBUTION".bold()
        )?;
        for entry in &results.insights.distribution {
            let padding = " ".repeat(20usize.saturating_sub(entry.zone.label().len()));
            writeln!(
                self.writer,
                "  {}{}{}",
                self.formatting.zone(entry.zone),
                padding,
                entry.count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        let insights = &results.insights;
        writeln!(
            self.writer,
            "{} {}",
            self.formatting.marker("💡", "!"),
            "RECOMMENDATIONS".bold()
        )?;
        if insights.wife_zone > 0 {
            let line = format!(
                "{} {} in Wife Zone",
                self.formatting.marker("✓", "+"),
                insights.wife_zone
            );
            writeln!(self.writer, "  {}", line.green())?;
        }
        if insights.danger_zone > 0 {
            let line = format!(
                "{} {} in Danger Zone",
                self.formatting.marker("⚠", "!"),
                insights.danger_zone
            );
            writeln!(self.writer, "  {}", line.red())?;
        }
        if insights.needs_more_people {
            writeln!(
                self.writer,
                "  {}",
                self.formatting
                    .warning("Consider adding more people for better insights")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &[&Person]) -> anyhow::Result<()> {
        if comparison.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            "{} {}",
            self.formatting.marker("⚖", "="),
            "COMPARISON".bold()
        )?;

        let mut table = self.new_table();
        let mut header = vec![Cell::new("")];
        header.extend(comparison.iter().map(|p| Cell::new(&p.name)));
        table.set_header(header);

        let mut hot = vec![Cell::new("Hot Score")];
        hot.extend(
            comparison
                .iter()
                .map(|p| Cell::new(format!("{:.1}", p.hot_score()))),
        );
        let mut crazy = vec![Cell::new("Crazy Score")];
        crazy.extend(
            comparison
                .iter()
                .map(|p| Cell::new(format!("{:.1}", p.crazy_score()))),
        );
        let mut zone = vec![Cell::new("Zone")];
        zone.extend(comparison.iter().map(|p| self.zone_cell(p.zone())));

        table.add_row(hot).add_row(crazy).add_row(zone);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_criteria(results)?;
        self.write_people(results)?;
        self.write_distribution(results)?;
        self.write_recommendations(results)?;
        self.write_comparison(&results.comparison)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn table_color(color: Color) -> comfy_table::Color {
    match color {
        Color::Cyan => comfy_table::Color::Cyan,
        Color::Green => comfy_table::Color::Green,
        Color::Blue => comfy_table::Color::Blue,
        Color::Red => comfy_table::Color::Red,
        Color::Yellow => comfy_table::Color::Yellow,
        Color::Magenta => comfy_table::Color::Magenta,
        _ => comfy_table::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::templates::find_template;

    fn render(session: &Session, keys: &[&str]) -> String {
        let mut view = ResultsView::new(session);
        if !keys.is_empty() {
            view = view.compare(session, keys).unwrap();
        }
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_results(&view)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_output_lists_people_and_advice() {
        let mut session = Session::default();
        session.apply_template(find_template("Classic Dating").unwrap());
        session.add_person("Alex");

        let output = render(&session, &[]);
        assert!(output.contains("Analysis of 1 person across 6 criteria"));
        assert!(output.contains("Alex"));
        assert!(output.contains("Danger Zone"));
        assert!(output.contains("! 1 in Danger Zone"));
        assert!(output.contains("Consider adding more people"));
        assert!(!output.contains('\u{1b}'));
        assert!(!output.contains("COMPARISON"));
    }

    #[test]
    fn comparison_table_is_rendered_when_requested() {
        let mut session = Session::default();
        session.apply_template(find_template("Athletic Type").unwrap());
        for name in ["Alex", "Sam", "Jordan"] {
            session.add_person(name);
        }

        let output = render(&session, &["Alex", "Jordan"]);
        assert!(output.contains("COMPARISON"));
        assert!(output.contains("Crazy Score"));
        assert!(!output.contains("Consider adding more people"));
    }
}
