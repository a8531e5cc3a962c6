//! Overpass query builders.
//!
//! Each builder takes a country name (the English `int_name` of the
//! country's area) and returns a complete Overpass QL query. The name is
//! inserted verbatim: an unknown or malformed name simply yields a query
//! that matches nothing when executed.

mod filter;

use std::fmt;
use std::str::FromStr;

pub use filter::{Element, Statement, TagFilter};

/// Output format directive placed at the top of every query.
pub const OUTPUT_FORMAT: &str = "[out:json];";

/// Print directive placed at the end of every query.
pub const OUTPUT_GEOMETRY: &str = "out geom;";

/// Excludes metro and tram stops from station queries.
const NOT_URBAN_TRANSIT: &[TagFilter] = &[
    TagFilter::NotEq("subway", "yes"),
    TagFilter::NotEq("station", "subway"),
    TagFilter::NotEq("station", "light_rail"),
    TagFilter::NotEq("light_rail", "yes"),
];

/// Excludes disused, service and non-passenger track from rail queries.
const PASSENGER_MAINLINE: &[TagFilter] = &[
    TagFilter::NotEq("disused:railway", "rail"),
    TagFilter::NotMatches("service", "."),
    TagFilter::NotEq("usage", "military"),
    TagFilter::NotEq("usage", "industrial"),
    TagFilter::NotEq("usage", "freight"),
    TagFilter::NotEq("usage", "tourism"),
];

const STATION_STATEMENTS: &[Statement] = &[
    Statement {
        element: Element::Node,
        include: &[TagFilter::Eq("railway", "stop")],
        exclude: NOT_URBAN_TRANSIT,
    },
    Statement {
        element: Element::Node,
        include: &[TagFilter::Eq("railway", "station")],
        exclude: NOT_URBAN_TRANSIT,
    },
    Statement {
        element: Element::Node,
        include: &[
            TagFilter::Eq("public_transport", "stop_position"),
            TagFilter::Eq("train", "yes"),
        ],
        exclude: NOT_URBAN_TRANSIT,
    },
];

const RAIL_STATEMENTS: &[Statement] = &[
    Statement {
        element: Element::Way,
        include: &[TagFilter::Eq("railway", "narrow_gauge")],
        exclude: PASSENGER_MAINLINE,
    },
    Statement {
        element: Element::Way,
        include: &[TagFilter::Eq("railway", "rail")],
        exclude: PASSENGER_MAINLINE,
    },
];

const CITY_STATEMENTS: &[Statement] = &[
    Statement {
        element: Element::Node,
        include: &[TagFilter::Eq("place", "city")],
        exclude: &[],
    },
    Statement {
        element: Element::Node,
        include: &[TagFilter::Eq("place", "town")],
        exclude: &[],
    },
];

/// Error returned when parsing an unknown feature kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature kind: {0} (expected station, rail or city)")]
pub struct UnknownFeatureKind(pub String);

/// The feature categories a query can extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Station,
    Rail,
    City,
}

impl FeatureKind {
    /// The union members selected by this kind.
    pub fn statements(&self) -> &'static [Statement] {
        match self {
            FeatureKind::Station => STATION_STATEMENTS,
            FeatureKind::Rail => RAIL_STATEMENTS,
            FeatureKind::City => CITY_STATEMENTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Station => "station",
            FeatureKind::Rail => "rail",
            FeatureKind::City => "city",
        }
    }
}

impl FromStr for FeatureKind {
    type Err = UnknownFeatureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "station" | "stations" => Ok(FeatureKind::Station),
            "rail" | "rails" => Ok(FeatureKind::Rail),
            "city" | "cities" => Ok(FeatureKind::City),
            _ => Err(UnknownFeatureKind(s.to_string())),
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Overpass query for one feature kind inside one country.
///
/// # Examples
///
/// ```
/// use rail_atlas::query::{FeatureKind, FeatureQuery};
///
/// let query = FeatureQuery::new(FeatureKind::City, "Germany");
/// let text = query.to_string();
/// assert!(text.contains(r#"area[int_name="Germany"]"#));
/// assert!(text.ends_with("out geom;\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureQuery {
    pub kind: FeatureKind,
    pub country: String,
}

impl FeatureQuery {
    pub fn new(kind: FeatureKind, country: impl Into<String>) -> Self {
        Self {
            kind,
            country: country.into(),
        }
    }
}

impl fmt::Display for FeatureQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{OUTPUT_FORMAT}")?;
        writeln!(f, "( area[int_name=\"{}\"]; )->.searchArea;", self.country)?;
        writeln!(f, "(")?;
        for statement in self.kind.statements() {
            writeln!(f, "{statement}")?;
        }
        writeln!(f, ");")?;
        writeln!(f, "(._;);")?;
        writeln!(f, "{OUTPUT_GEOMETRY}")
    }
}

/// Query for railway stations and train stop positions in `country`,
/// excluding metro and light rail.
pub fn query_station(country: &str) -> String {
    FeatureQuery::new(FeatureKind::Station, country).to_string()
}

/// Query for passenger rail and narrow gauge lines in `country`.
pub fn query_rail(country: &str) -> String {
    FeatureQuery::new(FeatureKind::Rail, country).to_string()
}

/// Query for cities and towns in `country`.
pub fn query_city(country: &str) -> String {
    FeatureQuery::new(FeatureKind::City, country).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_has_place_filters() {
        let q = query_city("Germany");
        assert!(q.contains(r#"place"="city""#));
        assert!(q.contains(r#"place"="town""#));
        assert!(q.contains("Germany"));
    }

    #[test]
    fn city_query_exact_text() {
        let expected = "[out:json];\n\
            ( area[int_name=\"Austria\"]; )->.searchArea;\n\
            (\n\
            node[\"place\"=\"city\"](area.searchArea);\n\
            node[\"place\"=\"town\"](area.searchArea);\n\
            );\n\
            (._;);\n\
            out geom;\n";
        assert_eq!(query_city("Austria"), expected);
    }

    #[test]
    fn station_query_selects_nodes_only() {
        let q = query_station("France");
        assert_eq!(q.matches("node[").count(), 3);
        assert!(!q.contains("way["));
        assert!(q.contains(r#"["railway"="stop"]"#));
        assert!(q.contains(r#"["railway"="station"]"#));
        assert!(q.contains(r#"["public_transport"="stop_position"]["train"="yes"]"#));
        assert_eq!(q.matches(r#"["light_rail"!="yes"]"#).count(), 3);
    }

    #[test]
    fn rail_query_selects_ways_only() {
        let q = query_rail("Italy");
        assert_eq!(q.matches("way[").count(), 2);
        assert!(!q.contains("node["));
        assert!(q.contains(r#"["railway"="narrow_gauge"]"#));
        assert!(q.contains(r#"["railway"="rail"]"#));
        assert_eq!(q.matches(r#"["service"!~"."]"#).count(), 2);
        assert_eq!(q.matches(r#"["usage"!="tourism"]"#).count(), 2);
    }

    #[test]
    fn empty_country_still_builds() {
        for q in [query_station(""), query_rail(""), query_city("")] {
            assert!(q.contains(r#"area[int_name=""]"#));
            assert_eq!(q.matches(OUTPUT_FORMAT).count(), 1);
            assert_eq!(q.matches(OUTPUT_GEOMETRY).count(), 1);
        }
    }

    #[test]
    fn kind_parse() {
        assert_eq!("station".parse::<FeatureKind>(), Ok(FeatureKind::Station));
        assert_eq!("Rails".parse::<FeatureKind>(), Ok(FeatureKind::Rail));
        assert_eq!(" city ".parse::<FeatureKind>(), Ok(FeatureKind::City));
        assert!("bus".parse::<FeatureKind>().is_err());
    }

    #[test]
    fn kind_parse_error_message() {
        let err = "tram".parse::<FeatureKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown feature kind: tram (expected station, rail or city)"
        );
    }

    #[test]
    fn builders_match_feature_query() {
        assert_eq!(
            query_rail("Spain"),
            FeatureQuery::new(FeatureKind::Rail, "Spain").to_string()
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Country-like names that cannot collide with any query keyword.
    fn country_name() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{2,12}ia"
    }

    fn all_queries(country: &str) -> [String; 3] {
        [query_station(country), query_rail(country), query_city(country)]
    }

    proptest! {
        /// The country name appears exactly once
        #[test]
        fn country_appears_once(s in country_name()) {
            for q in all_queries(&s) {
                prop_assert_eq!(q.matches(s.as_str()).count(), 1);
            }
        }

        /// Exactly one output directive and one area clause
        #[test]
        fn single_directives(s in country_name()) {
            for q in all_queries(&s) {
                prop_assert_eq!(q.matches(OUTPUT_FORMAT).count(), 1);
                prop_assert_eq!(q.matches(OUTPUT_GEOMETRY).count(), 1);
                prop_assert_eq!(q.matches("area[int_name=").count(), 1);
            }
        }

        /// Builders never panic, whatever the input
        #[test]
        fn arbitrary_input_builds(s in ".*") {
            for q in all_queries(&s) {
                prop_assert!(q.starts_with(OUTPUT_FORMAT));
            }
        }
    }
}
