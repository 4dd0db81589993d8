//! Greedy buy list planning.
//!
//! Repeatedly picks the seller covering the most still-unassigned cards and
//! buys every one of those cards from them. This is an approximate set
//! cover: it favors few distinct sellers and full determinism over a
//! guaranteed minimum.

use crate::error::PlanError;
use crate::models::{BuyEntry, BuyPlan, InventorySet, MatchTable};
use crate::ranking::rank_sellers;

/// Assigns every card in `table` to exactly one seller.
///
/// Each iteration re-ranks all sellers against the cards still pending,
/// takes the top seller (ties resolved by registration order, see
/// [`rank_sellers`]) and moves every pending card that seller offers into
/// the plan, recording the seller's offered quantity. An empty table
/// returns an empty plan without iterating.
///
/// At least one card leaves the pool per iteration, so the loop runs at
/// most `table.len()` times. A top-ranked coverage count of zero while
/// cards are still pending means the table references sellers the
/// inventory set does not know, which is a bug in whatever built the
/// table; it surfaces as an error rather than looping forever.
pub fn plan_buylist(table: &MatchTable, inventories: &InventorySet) -> Result<BuyPlan, PlanError> {
    let mut pending = table.clone();
    let mut plan = BuyPlan::new();

    while let Some((seller, assigned)) = assign_best_seller(&pending, inventories)? {
        log::debug!("assigning {} cards to {seller}", assigned.len());
        for entry in &assigned {
            pending.shift_remove(&entry.name);
        }
        plan.entry(seller).or_default().extend(assigned);
    }

    Ok(plan)
}

/// One planning step: rank sellers over the pending cards and collect
/// everything the winner offers, in pending order. An empty pool is the
/// normal terminal condition and yields `Ok(None)`.
fn assign_best_seller(
    pending: &MatchTable,
    inventories: &InventorySet,
) -> Result<Option<(String, Vec<BuyEntry>)>, PlanError> {
    let Some((first_card, first_offers)) = pending.first() else {
        return Ok(None);
    };

    let best = rank_sellers(inventories, pending)
        .into_iter()
        .next()
        .filter(|best| best.count > 0);
    let Some(best) = best else {
        // No seller covers anything, so no offer in the whole pool names a
        // known seller and the first card pinpoints the broken invariant.
        return Err(match first_offers
            .iter()
            .find(|offer| !inventories.sellers.contains_key(&offer.seller))
        {
            Some(offer) => PlanError::UnknownSeller {
                seller: offer.seller.clone(),
            },
            None => PlanError::NoOffers {
                card: first_card.clone(),
            },
        });
    };

    let assigned = pending
        .iter()
        .filter_map(|(card, offers)| {
            offers
                .iter()
                .find(|offer| offer.seller == best.seller)
                .map(|offer| BuyEntry {
                    name: card.clone(),
                    quantity: offer.quantity,
                })
        })
        .collect();

    Ok(Some((best.seller, assigned)))
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
