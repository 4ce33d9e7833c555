//! Spreadsheet export.
//!
//! `Name,Hot Score,Crazy Score,Zone` followed by one column per criterion
//! (hot first). Scores use one decimal; a criterion the person was never
//! rated on is written as `0`.

use crate::core::{Criterion, Person};
use crate::io::output::{OutputWriter, ResultsView};
use std::borrow::Cow;
use std::io::Write;

const FIXED_COLUMNS: [&str; 4] = ["Name", "Hot Score", "Crazy Score", "Zone"];

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row<'a>(
        &mut self,
        fields: impl IntoIterator<Item = Cow<'a, str>>,
    ) -> anyhow::Result<()> {
        let line = fields
            .into_iter()
            .map(|field| escape_field(&field).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        let header = FIXED_COLUMNS
            .iter()
            .map(|c| Cow::Borrowed(*c))
            .chain(results.criteria.iter().map(|c| Cow::Borrowed(c.name.as_str())));
        self.write_row(header)?;

        for person in &results.people {
            self.write_row(person_row(person, &results.criteria))?;
        }
        Ok(())
    }
}

fn person_row<'a>(person: &'a Person, criteria: &[&Criterion]) -> Vec<Cow<'a, str>> {
    let mut row = vec![
        Cow::Borrowed(person.name.as_str()),
        Cow::Owned(format!("{:.1}", person.hot_score())),
        Cow::Owned(format!("{:.1}", person.crazy_score())),
        Cow::Borrowed(person.zone().label()),
    ];
    row.extend(criteria.iter().map(|c| match person.score(&c.id) {
        Some(score) => Cow::Owned(format!("{score:.1}")),
        None => Cow::Borrowed("0"),
    }));
    row
}

/// Quote a field if it contains a separator, quote or line break
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, ScoreMap};
    use crate::session::Session;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_header_and_rows() {
        let mut session = Session::default();
        let looks = session
            .insert_criterion(None, "looks", 1.0, Category::Hot)
            .unwrap();
        session
            .insert_criterion(None, "drama, mostly", 1.0, Category::Crazy)
            .unwrap();
        session
            .add_person_with_scores("Alex", ScoreMap::from([(looks, 9.0)]))
            .unwrap();

        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .write_results(&ResultsView::new(&session))
            .unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "Name,Hot Score,Crazy Score,Zone,looks,\"drama, mostly\"\n\
             Alex,9.0,5.0,Wife Zone,9.0,0\n"
        );
    }

    #[test]
    fn escaping_doubles_quotes() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }
}
