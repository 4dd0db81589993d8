//! Ranks sellers by how many of the matched cards they can supply.

use crate::models::{CoverageRanking, InventorySet, MatchTable, SellerCoverage};

/// Counts, for every known seller, how many cards in `table` list that
/// seller among their offers, and sorts descending by count.
///
/// Sellers with zero matches are kept in the ranking. The sort is stable,
/// so equal counts keep seller registration order; the planner depends on
/// this tie-break being reproducible.
pub fn rank_sellers(inventories: &InventorySet, table: &MatchTable) -> CoverageRanking {
    let mut ranking: CoverageRanking = inventories
        .sellers
        .keys()
        .map(|seller| SellerCoverage {
            seller: seller.clone(),
            count: table
                .values()
                .filter(|offers| offers.iter().any(|offer| &offer.seller == seller))
                .count(),
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}
