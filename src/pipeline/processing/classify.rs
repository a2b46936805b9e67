use crate::types::{FlatRecord, SiteType};

/// Ownership category by ordered heuristics; the first match wins.
pub fn classify(record: &FlatRecord) -> SiteType {
    if record.tags.contains("\"water_park\"") {
        SiteType::CommercialWaterPark
    } else if record.name.to_uppercase().contains("HOA") {
        SiteType::Hoa
    } else if record.name.to_lowercase().contains("school") {
        SiteType::School
    } else {
        SiteType::MunicipalPark
    }
}
