/// Tag filters that mark a feature as a splash pad, one `nwr` statement each.
pub const SPLASH_PAD_FILTERS: [&str; 7] = [
    r#"["playground"="splash_pad"]"#,
    r#"["playground:splash_pad"="yes"]"#,
    r#"["fountain"="splash_pad"]"#,
    r#"["water_feature"="splash_pad"]"#,
    r#"["leisure"="water_park"]"#,
    r#"["amenity"="water_park"]"#,
    r#"["name"~"splash\s*pad|spray\s*ground|sprayground",i]"#,
];

/// Render the Overpass QL query for one region.
///
/// Non-node geometries are returned with `out center` so every element
/// carries a single representative coordinate.
pub fn render_query(area_ref: u64, timeout_secs: u64) -> String {
    let mut query = format!("[out:json][timeout:{timeout_secs}];\narea({area_ref})->.a;\n(\n");
    for filter in SPLASH_PAD_FILTERS {
        query.push_str(&format!("  nwr{filter}(area.a);\n"));
    }
    query.push_str(");\nout center;\n");
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::all_regions;

    #[test]
    fn test_query_is_scoped_to_region_area() {
        for region in all_regions() {
            let q = render_query(region.area_ref, 240);
            assert!(q.contains(&format!("area({})->.a;", region.area_ref)));
        }
    }

    #[test]
    fn test_query_embeds_every_heuristic_regardless_of_timeout() {
        for timeout in [1, 240, 900] {
            let q = render_query(3_600_161_950, timeout);
            assert!(q.starts_with(&format!("[out:json][timeout:{timeout}];")));
            for filter in SPLASH_PAD_FILTERS {
                assert_eq!(q.matches(filter).count(), 1, "filter {filter}");
            }
            assert_eq!(q.matches("nwr[").count(), SPLASH_PAD_FILTERS.len());
            assert!(q.trim_end().ends_with("out center;"));
        }
    }

    #[test]
    fn test_name_regex_is_case_insensitive() {
        let q = render_query(1, 1);
        assert!(q.contains(r#"nwr["name"~"splash\s*pad|spray\s*ground|sprayground",i](area.a);"#));
    }
}
