use crate::models::{MatchWeights, NormalizedAd};

/// Score one buyer/seller pair by attribute overlap.
///
/// Each satisfied criterion adds its weight; bedrooms are the exception and
/// subtract a penalty when they do not overlap. Returns the total plus the
/// names of the criteria that matched, for reporting.
pub fn score_pair(
    buyer: &NormalizedAd,
    seller: &NormalizedAd,
    weights: &MatchWeights,
) -> (i32, Vec<String>) {
    let mut score = 0;
    let mut matched = Vec::new();

    if !buyer.neighborhoods.is_disjoint(&seller.neighborhoods) {
        score += weights.neighborhood;
        matched.push("neighborhood".to_string());
    }

    if buyer.price.overlaps(&seller.price) {
        score += weights.price;
        matched.push("price".to_string());
    }

    if let (Some(wanted), Some(offered)) = (buyer.property_type, seller.property_type) {
        if wanted == offered {
            score += weights.property_type;
            matched.push("property_type".to_string());
        }
    }

    if buyer.bedrooms.overlaps(&seller.bedrooms) {
        score += weights.bedrooms;
        matched.push("bedrooms".to_string());
    } else {
        score -= weights.bedroom_mismatch_penalty;
    }

    if buyer.area_m2.overlaps(&seller.area_m2) {
        score += weights.area_m2;
        matched.push("area_m2".to_string());
    }

    (score, matched)
}
