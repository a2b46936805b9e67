use crate::constants::OVERPASS_RELATION_AREA_OFFSET;
use crate::error::{HarvestError, Result};

/// A state-level region and the Overpass area that bounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub area_ref: u64,
}

impl Region {
    pub const fn from_relation(code: &'static str, relation_id: u64) -> Self {
        Self {
            code,
            area_ref: OVERPASS_RELATION_AREA_OFFSET + relation_id,
        }
    }
}

// admin_level=4 boundary relations: contiguous 48 + DC (HI and AK excluded)
const STATE_RELATIONS: [(&str, u64); 49] = [
    ("AL", 161950), ("AZ", 162018), ("AR", 161646), ("CA", 165475),
    ("CO", 161961), ("CT", 165794), ("DE", 162110), ("FL", 162050), ("GA", 161957),
    ("ID", 162116), ("IL", 122586), ("IN", 161816), ("IA", 161650), ("KS", 161644),
    ("KY", 161655), ("LA", 224922), ("ME", 63512), ("MD", 162112), ("MA", 61315),
    ("MI", 165789), ("MN", 165471), ("MS", 161943), ("MO", 161638), ("MT", 162115),
    ("NE", 161648), ("NV", 165473), ("NH", 67213), ("NJ", 224951), ("NM", 162014),
    ("NY", 61320), ("NC", 224045), ("ND", 161653), ("OH", 162061), ("OK", 161645),
    ("OR", 165476), ("PA", 162109), ("RI", 392915), ("SC", 224040), ("SD", 161652),
    ("TN", 161838), ("TX", 114690), ("UT", 161993), ("VT", 60759), ("VA", 224042),
    ("WA", 165479), ("WV", 162068), ("WI", 165466), ("WY", 161991), ("DC", 162069),
];

/// Every region in catalog order.
pub fn all_regions() -> Vec<Region> {
    STATE_RELATIONS
        .iter()
        .map(|&(code, rel)| Region::from_relation(code, rel))
        .collect()
}

pub fn find_region(code: &str) -> Option<Region> {
    let code = code.trim();
    all_regions()
        .into_iter()
        .find(|r| r.code.eq_ignore_ascii_case(code))
}

/// Restrict the catalog to the requested codes, keeping catalog order.
pub fn select_regions(codes: &[String]) -> Result<Vec<Region>> {
    for code in codes {
        if find_region(code).is_none() {
            return Err(HarvestError::UnknownRegion(code.clone()));
        }
    }
    Ok(all_regions()
        .into_iter()
        .filter(|r| codes.iter().any(|c| r.code.eq_ignore_ascii_case(c.trim())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_49_unique_regions() {
        let regions = all_regions();
        assert_eq!(regions.len(), 49);
        let codes: HashSet<_> = regions.iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), 49);
        assert!(codes.contains("DC"));
        assert!(!codes.contains("HI"));
        assert!(!codes.contains("AK"));
    }

    #[test]
    fn test_area_ref_offsets_relation() {
        let tx = find_region("tx").unwrap();
        assert_eq!(tx.area_ref, 3_600_114_690);
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let selected = select_regions(&["TX".into(), "al".into()]).unwrap();
        let codes: Vec<_> = selected.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["AL", "TX"]);
    }

    #[test]
    fn test_select_rejects_unknown_code() {
        let err = select_regions(&["HI".into()]).unwrap_err();
        assert!(matches!(err, HarvestError::UnknownRegion(code) if code == "HI"));
    }
}
