//! Zone map classification.
//!
//! The (hot, crazy) plane over [0,10]×[0,10] is split into six named
//! regions. Their bounding rectangles overlap, so classification walks an
//! ordered rule list and the first match wins; every shared edge (x=5, x=8,
//! y=1, y=5, y=8 and the diagonal y=x) resolves to the earlier rule.
//! Points outside the square, and NaN, are [`Zone::Unknown`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    ChromosomeMismatch,
    WifeZone,
    DateZone,
    DangerZone,
    FunZone,
    NoGoZone,
    Unknown,
}

/// Outline shape of a region, as drawn on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rectangle,
    Triangle,
    Trapezoid,
}

/// Geometry and copy for one region of the zone map.
///
/// `x` and `y` are the bounding rectangle; `outline` is the polygon a
/// chart draws (counter-clockwise from the lower-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneRegion {
    pub zone: Zone,
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub shape: Shape,
    pub outline: &'static [(f64, f64)],
    pub label_anchor: (f64, f64),
}

/// Regions in classification priority order
pub static ZONE_REGIONS: [ZoneRegion; 6] = [
    ZoneRegion {
        zone: Zone::ChromosomeMismatch,
        x: (8.0, 10.0),
        y: (0.0, 1.0),
        shape: Shape::Rectangle,
        outline: &[(8.0, 0.0), (10.0, 0.0), (10.0, 1.0), (8.0, 1.0)],
        label_anchor: (9.0, 0.5),
    },
    ZoneRegion {
        zone: Zone::WifeZone,
        x: (8.0, 10.0),
        y: (1.0, 5.0),
        shape: Shape::Rectangle,
        outline: &[(8.0, 1.0), (10.0, 1.0), (10.0, 5.0), (8.0, 5.0)],
        label_anchor: (9.0, 3.0),
    },
    ZoneRegion {
        zone: Zone::DateZone,
        x: (8.0, 10.0),
        y: (5.0, 10.0),
        shape: Shape::Trapezoid,
        outline: &[(8.0, 5.0), (10.0, 5.0), (10.0, 10.0), (8.0, 8.0)],
        label_anchor: (9.0, 7.0),
    },
    ZoneRegion {
        zone: Zone::DangerZone,
        x: (5.0, 10.0),
        y: (5.0, 10.0),
        shape: Shape::Triangle,
        outline: &[(5.0, 5.0), (10.0, 10.0), (5.0, 10.0)],
        label_anchor: (6.7, 8.3),
    },
    ZoneRegion {
        zone: Zone::FunZone,
        x: (5.0, 8.0),
        y: (0.0, 8.0),
        shape: Shape::Trapezoid,
        outline: &[(5.0, 0.0), (8.0, 0.0), (8.0, 8.0), (5.0, 5.0)],
        label_anchor: (6.5, 3.0),
    },
    ZoneRegion {
        zone: Zone::NoGoZone,
        x: (0.0, 5.0),
        y: (0.0, 10.0),
        shape: Shape::Rectangle,
        outline: &[(0.0, 0.0), (5.0, 0.0), (5.0, 10.0), (0.0, 10.0)],
        label_anchor: (2.5, 5.0),
    },
];

impl Zone {
    /// The six mapped zones, in classification priority order
    pub const MAPPED: [Zone; 6] = [
        Zone::ChromosomeMismatch,
        Zone::WifeZone,
        Zone::DateZone,
        Zone::DangerZone,
        Zone::FunZone,
        Zone::NoGoZone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Zone::ChromosomeMismatch => "Chromosome Mismatch",
            Zone::WifeZone => "Wife Zone",
            Zone::DateZone => "Date Zone",
            Zone::DangerZone => "Danger Zone",
            Zone::FunZone => "Fun Zone",
            Zone::NoGoZone => "No Go Zone",
            Zone::Unknown => "Unknown Zone",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Zone::ChromosomeMismatch => {
                "Seems too good to be true - verify authenticity. High attraction with low \
                 complexity may indicate incomplete information or misrepresentation."
            }
            Zone::WifeZone => {
                "Ideal for long-term relationships. High compatibility with good stability. \
                 Consider introducing to family and friends when appropriate."
            }
            Zone::DateZone => {
                "Good for casual dating and exploring compatibility. Located below the \
                 diagonal line in the upper right quadrant."
            }
            Zone::DangerZone => {
                "Proceed with caution. High attraction but potentially unstable. Keep \
                 boundaries clear and avoid sharing sensitive information early."
            }
            Zone::FunZone => {
                "Great for exciting experiences but may lack long-term stability. Enjoy the \
                 connection while being mindful of emotional boundaries."
            }
            Zone::NoGoZone => {
                "Avoid investing time here. These individuals may not meet your standards \
                 for a meaningful relationship. Focus your energy elsewhere."
            }
            Zone::Unknown => "Scores fall outside the 0-10 zone map.",
        }
    }

    /// Geometry of this zone; `None` for [`Zone::Unknown`]
    pub fn region(&self) -> Option<&'static ZoneRegion> {
        ZONE_REGIONS.iter().find(|r| r.zone == *self)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let wanted = s.trim();
        // Older builds labelled the top-priority corner "XY Mixup"
        if wanted.eq_ignore_ascii_case("XY Mixup") {
            return Ok(Zone::ChromosomeMismatch);
        }
        Zone::MAPPED
            .into_iter()
            .chain([Zone::Unknown])
            .find(|zone| zone.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownZone(wanted.to_string()))
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

fn within(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}

/// Classify a (hot, crazy) point. First matching rule wins.
pub fn classify_zone(x: f64, y: f64) -> Zone {
    if within(x, 8.0, 10.0) && within(y, 0.0, 1.0) {
        return Zone::ChromosomeMismatch;
    }
    if within(x, 8.0, 10.0) && within(y, 1.0, 5.0) {
        return Zone::WifeZone;
    }
    if within(x, 8.0, 10.0) && within(y, 5.0, 10.0) && y <= x {
        return Zone::DateZone;
    }
    if within(x, 5.0, 10.0) && within(y, 5.0, 10.0) && y >= x {
        return Zone::DangerZone;
    }
    if within(x, 5.0, 8.0) && within(y, 0.0, 8.0) && (y < 5.0 || y < x) {
        return Zone::FunZone;
    }
    if within(x, 0.0, 5.0) && within(y, 0.0, 10.0) {
        return Zone::NoGoZone;
    }
    Zone::Unknown
}

/// Count of people per zone, in priority order, omitting empty zones
pub fn zone_distribution(zones: impl IntoIterator<Item = Zone>) -> Vec<(Zone, usize)> {
    let mut counts = [0usize; 7];
    for zone in zones {
        counts[zone as usize] += 1;
    }
    Zone::MAPPED
        .into_iter()
        .chain([Zone::Unknown])
        .filter_map(|zone| {
            let count = counts[zone as usize];
            (count > 0).then_some((zone, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_vectors() {
        assert_eq!(classify_zone(9.0, 0.5), Zone::ChromosomeMismatch);
        assert_eq!(classify_zone(9.0, 3.0), Zone::WifeZone);
        assert_eq!(classify_zone(9.0, 9.0), Zone::DateZone);
        assert_eq!(classify_zone(6.0, 9.0), Zone::DangerZone);
        assert_eq!(classify_zone(6.0, 3.0), Zone::FunZone);
        assert_eq!(classify_zone(2.0, 7.0), Zone::NoGoZone);
    }

    #[test]
    fn diagonal_below_eight_is_danger() {
        assert_eq!(classify_zone(7.0, 7.0), Zone::DangerZone);
        assert_eq!(classify_zone(5.0, 5.0), Zone::DangerZone);
        assert_eq!(classify_zone(8.0, 8.0), Zone::DateZone);
        assert_eq!(classify_zone(10.0, 10.0), Zone::DateZone);
    }

    #[test]
    fn shared_edges_resolve_to_earlier_rule() {
        // y = 1 belongs to Chromosome Mismatch, y = 5 to Wife Zone
        assert_eq!(classify_zone(8.0, 1.0), Zone::ChromosomeMismatch);
        assert_eq!(classify_zone(8.0, 5.0), Zone::WifeZone);
        assert_eq!(classify_zone(10.0, 5.0), Zone::WifeZone);
        // x = 8 with low crazy belongs to the right-hand column
        assert_eq!(classify_zone(8.0, 0.0), Zone::ChromosomeMismatch);
        assert_eq!(classify_zone(8.0, 3.0), Zone::WifeZone);
        // x = 5 belongs to the Fun Zone below the diagonal
        assert_eq!(classify_zone(5.0, 0.0), Zone::FunZone);
        assert_eq!(classify_zone(5.0, 4.99), Zone::FunZone);
        assert_eq!(classify_zone(4.99, 4.99), Zone::NoGoZone);
        // x = 5 on or above y = 5 is Danger
        assert_eq!(classify_zone(5.0, 10.0), Zone::DangerZone);
        // y = 8 at x just under 8
        assert_eq!(classify_zone(7.9, 8.0), Zone::DangerZone);
        assert_eq!(classify_zone(7.9, 7.8), Zone::FunZone);
    }

    #[test]
    fn fun_zone_below_diagonal_above_five() {
        assert_eq!(classify_zone(6.0, 5.5), Zone::FunZone);
        assert_eq!(classify_zone(7.5, 7.4), Zone::FunZone);
        assert_eq!(classify_zone(7.5, 7.5), Zone::DangerZone);
    }

    #[test]
    fn above_diagonal_in_right_column_is_danger() {
        assert_eq!(classify_zone(8.5, 9.0), Zone::DangerZone);
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(classify_zone(-0.1, 5.0), Zone::Unknown);
        assert_eq!(classify_zone(5.0, 10.5), Zone::Unknown);
        assert_eq!(classify_zone(11.0, 11.0), Zone::Unknown);
        assert_eq!(classify_zone(f64::NAN, 3.0), Zone::Unknown);
        assert_eq!(classify_zone(3.0, f64::NAN), Zone::Unknown);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for zone in Zone::MAPPED {
            assert_eq!(zone.label().parse::<Zone>().unwrap(), zone);
        }
        assert_eq!("xy mixup".parse::<Zone>().unwrap(), Zone::ChromosomeMismatch);
        assert!("Friend Zone".parse::<Zone>().is_err());
    }

    #[test]
    fn every_mapped_zone_has_a_region() {
        for zone in Zone::MAPPED {
            let region = zone.region().unwrap();
            assert_eq!(region.zone, zone);
            let (ax, ay) = region.label_anchor;
            assert!(within(ax, region.x.0, region.x.1));
            assert!(within(ay, region.y.0, region.y.1));
        }
        assert!(Zone::Unknown.region().is_none());
    }

    #[test]
    fn region_table_is_in_priority_order() {
        let order: Vec<Zone> = ZONE_REGIONS.iter().map(|r| r.zone).collect();
        assert_eq!(order, Zone::MAPPED.to_vec());
    }

    #[test]
    fn label_anchors_classify_into_their_own_zone() {
        for region in &ZONE_REGIONS {
            let (x, y) = region.label_anchor;
            assert_eq!(classify_zone(x, y), region.zone, "{}", region.zone);
        }
    }

    #[test]
    fn distribution_counts_and_skips_empty() {
        let dist = zone_distribution([
            Zone::FunZone,
            Zone::WifeZone,
            Zone::FunZone,
            Zone::Unknown,
        ]);
        assert_eq!(
            dist,
            vec![(Zone::WifeZone, 1), (Zone::FunZone, 2), (Zone::Unknown, 1)]
        );
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Zone::NoGoZone).unwrap(),
            "\"No Go Zone\""
        );
        let zone: Zone = serde_json::from_str("\"Wife Zone\"").unwrap();
        assert_eq!(zone, Zone::WifeZone);
    }
}
