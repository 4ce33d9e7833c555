use crate::io::output::{OutputWriter, ResultsView};
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &ResultsView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::templates::find_template;

    #[test]
    fn emits_people_with_assessment_fields() {
        let mut session = Session::default();
        session.apply_template(find_template("Natural Beauty").unwrap());
        session.add_person("Alex");

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_results(&ResultsView::new(&session))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let person = &value["people"][0];
        assert_eq!(person["name"], "Alex");
        assert!((person["hot_score"].as_f64().unwrap() - 5.0).abs() < 1e-9);
        assert_eq!(person["zone"], "Danger Zone");
        assert_eq!(value["insights"]["danger_zone"], 1);
        assert_eq!(value["criteria"].as_array().unwrap().len(), 6);
        assert!(value.get("comparison").is_none());
    }
}
