use crate::zones::{classify_zone, Zone};
use anyhow::Result;
use std::io::Write;

pub fn classify_point(hot: f64, crazy: f64, out: &mut impl Write) -> Result<Zone> {
    let zone = classify_zone(hot, crazy);
    if zone == Zone::Unknown {
        log::warn!("({hot}, {crazy}) lies outside the 0-10 zone map");
    }
    writeln!(out, "{zone}")?;
    writeln!(out, "{}", zone.description())?;
    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_label_then_description() {
        let mut buffer = Vec::new();
        let zone = classify_point(9.0, 3.0, &mut buffer).unwrap();
        assert_eq!(zone, Zone::WifeZone);
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Wife Zone\n"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn out_of_range_is_unknown() {
        let mut buffer = Vec::new();
        assert_eq!(
            classify_point(11.0, 3.0, &mut buffer).unwrap(),
            Zone::Unknown
        );
    }
}
