//! Tests for coordinate and name extraction

use crate::app::services::import_normalizer::extraction::decode_place_name;
use crate::app::services::import_normalizer::{LineMatch, classify_line, parse_maps_link};

fn parsed_parts(result: &LineMatch) -> (String, String) {
    let parsed = result.parsed().expect("line should match");
    (parsed.gps.to_string(), parsed.name.clone())
}

mod wkt_tests {
    use super::*;

    #[test]
    fn test_quoted_geometry_column() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\", Parc Sportif, extra");
        assert!(matches!(result, LineMatch::Wkt(_)));

        let (gps, name) = parsed_parts(&result);
        assert_eq!(gps, "33.6107, -7.4907");
        assert_eq!(name, "Parc Sportif");
    }

    #[test]
    fn test_axis_order_is_swapped() {
        let result = classify_line("POINT (2.2945 48.8584)");
        let parsed = result.parsed().unwrap();
        assert_eq!(parsed.gps.latitude(), "48.8584");
        assert_eq!(parsed.gps.longitude(), "2.2945");
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let result = classify_line("point(-7.5 33.5) Kiosque");
        assert!(matches!(result, LineMatch::Wkt(_)));
        assert_eq!(parsed_parts(&result).0, "33.5, -7.5");
    }

    #[test]
    fn test_short_first_field_joined_with_next() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\",B2,Rue des Écoles,note");
        assert_eq!(parsed_parts(&result).1, "B2, Rue des Écoles");
    }

    #[test]
    fn test_short_first_field_without_next_field() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\",B2");
        assert_eq!(parsed_parts(&result).1, "B2");
    }

    #[test]
    fn test_quoted_name_field() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\",\"Gare Routière\",\"\"");
        assert_eq!(parsed_parts(&result).1, "Gare Routière");
    }

    #[test]
    fn test_unquoted_geometry_name_runs_to_next_comma() {
        let result = classify_line("POINT (2.2945 48.8584) Tour Eiffel, Paris");
        assert_eq!(parsed_parts(&result).1, "Tour Eiffel");
    }

    #[test]
    fn test_empty_name_after_geometry() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\",,");
        let (gps, name) = parsed_parts(&result);
        assert_eq!(gps, "33.6107, -7.4907");
        assert!(name.is_empty());
    }

    #[test]
    fn test_wkt_wins_over_decimal_pair() {
        let result = classify_line("\"POINT (-7.4907 33.6107)\",Parc,12.5, 13.5");
        assert!(matches!(result, LineMatch::Wkt(_)));
        assert_eq!(parsed_parts(&result).0, "33.6107, -7.4907");
    }

    #[test]
    fn test_integer_wkt_falls_through() {
        // Both coordinates need a fractional part
        let result = classify_line("POINT (7 33)");
        assert_eq!(result, LineMatch::NoMatch);
    }
}

mod decimal_pair_tests {
    use super::*;

    #[test]
    fn test_bare_pair_has_empty_name() {
        let result = classify_line("33.5731, -7.5898");
        assert!(matches!(result, LineMatch::DecimalPair(_)));

        let (gps, name) = parsed_parts(&result);
        assert_eq!(gps, "33.5731, -7.5898");
        assert!(name.is_empty());
    }

    #[test]
    fn test_pair_without_space() {
        let (gps, _) = parsed_parts(&classify_line("33.5731,-7.5898"));
        assert_eq!(gps, "33.5731, -7.5898");
    }

    #[test]
    fn test_name_before_pair() {
        let (gps, name) = parsed_parts(&classify_line("\"Café du Port\", 33.5731, -7.5898"));
        assert_eq!(gps, "33.5731, -7.5898");
        assert_eq!(name, "Café du Port");
    }

    #[test]
    fn test_name_stops_at_link() {
        let (_, name) =
            parsed_parts(&classify_line("Bureau Nord https://maps.app.goo.gl/abc 33.5, -7.5"));
        assert_eq!(name, "Bureau Nord");
    }

    #[test]
    fn test_place_link_name_is_decoded() {
        let result = classify_line(
            "https://maps.google.com/maps/place/Caf%C3%A9+Central/@33.59,-7.61,15z",
        );
        let (gps, name) = parsed_parts(&result);
        assert_eq!(gps, "33.59, -7.61");
        assert_eq!(name, "Café Central");
    }

    #[test]
    fn test_first_pair_wins() {
        let (gps, _) = parsed_parts(&classify_line("Stade 33.1, -7.1 puis 34.2, -8.2"));
        assert_eq!(gps, "33.1, -7.1");
    }

    #[test]
    fn test_no_coordinates() {
        assert_eq!(classify_line("Just a note"), LineMatch::NoMatch);
        assert_eq!(classify_line("Parc 33, -7"), LineMatch::NoMatch);
        assert!(classify_line("nothing here").into_parsed().is_none());
    }
}

mod decoding_tests {
    use super::*;

    #[test]
    fn test_plus_and_percent_escapes() {
        assert_eq!(decode_place_name("Caf%C3%A9+Central"), "Café Central");
        assert_eq!(decode_place_name("Place%20d%27Armes"), "Place d'Armes");
    }

    #[test]
    fn test_malformed_escape_kept_literal() {
        assert_eq!(decode_place_name("100%+Bio"), "100% Bio");
        assert_eq!(decode_place_name("Zone%ZZ"), "Zone%ZZ");
        assert_eq!(decode_place_name("Fin%4"), "Fin%4");
    }
}

mod maps_link_tests {
    use super::*;

    #[test]
    fn test_link_with_place() {
        let link =
            parse_maps_link("https://www.google.com/maps/place/Caf%C3%A9+Central/@33.59,-7.61,15z")
                .unwrap();
        assert_eq!(link.gps.to_string(), "33.59, -7.61");
        assert_eq!(link.place_name.as_deref(), Some("Café Central"));
    }

    #[test]
    fn test_link_without_place() {
        let link = parse_maps_link("https://www.google.com/maps/@-33.8568,151.2153,17z").unwrap();
        assert_eq!(link.gps.to_string(), "-33.8568, 151.2153");
        assert_eq!(link.place_name, None);
    }

    #[test]
    fn test_text_without_marker() {
        assert!(parse_maps_link("33.59, -7.61").is_none());
        assert!(parse_maps_link("https://maps.app.goo.gl/xyz").is_none());
    }
}
