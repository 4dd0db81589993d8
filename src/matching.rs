//! Matches wanted cards against seller inventories.

use crate::models::{GapList, InventorySet, MatchTable, SellerOffer, WantList};

/// Builds the match table: every wanted card that at least one seller
/// stocks, with all of its offers.
///
/// Sellers are scanned in registration order, so each card's offer list is
/// in registration order too. A want list or inventory set with no overlap
/// yields an empty table.
pub fn match_offers(inventories: &InventorySet, wants: &WantList) -> MatchTable {
    let mut table = MatchTable::new();
    for (seller, inventory) in &inventories.sellers {
        for card in wants.cards.keys() {
            if let Some(&quantity) = inventory.get(card) {
                table
                    .entry(card.clone())
                    .or_default()
                    .push(SellerOffer {
                        seller: seller.clone(),
                        quantity,
                    });
            }
        }
    }
    table
}

/// Wanted cards absent from the match table, i.e. cards no seller stocks.
/// Returned in want-list order.
pub fn missing_cards(wants: &WantList, table: &MatchTable) -> GapList {
    wants
        .cards
        .keys()
        .filter(|card| !table.contains_key(*card))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn want_list(cards: &[(&str, u32)]) -> WantList {
        WantList {
            name: "Mainboard".to_string(),
            cards: cards
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        }
    }

    fn inventory_set(sellers: &[(&str, &[(&str, u32)])]) -> InventorySet {
        let mut set = InventorySet::new();
        for (seller, stock) in sellers {
            let inventory: IndexMap<String, u32> = stock
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect();
            set.register(seller.to_string(), inventory);
        }
        set
    }

    #[test]
    fn collects_offers_from_every_stocking_seller() {
        let wants = want_list(&[("Bolt", 1), ("Counterspell", 1)]);
        let sellers = inventory_set(&[
            ("A", &[("Bolt", 2), ("Counterspell", 1)]),
            ("B", &[("Bolt", 1)]),
        ]);

        let table = match_offers(&sellers, &wants);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table["Bolt"],
            vec![
                SellerOffer { seller: "A".to_string(), quantity: 2 },
                SellerOffer { seller: "B".to_string(), quantity: 1 },
            ]
        );
        assert_eq!(
            table["Counterspell"],
            vec![SellerOffer { seller: "A".to_string(), quantity: 1 }]
        );
    }

    #[test]
    fn ignores_stock_nobody_asked_for() {
        let wants = want_list(&[("Bolt", 1)]);
        let sellers = inventory_set(&[("A", &[("Bolt", 1), ("Brainstorm", 4)])]);

        let table = match_offers(&sellers, &wants);

        assert_eq!(table.len(), 1);
        assert!(table.contains_key("Bolt"));
    }

    #[test]
    fn card_names_are_case_sensitive() {
        let wants = want_list(&[("Bolt", 1)]);
        let sellers = inventory_set(&[("A", &[("bolt", 1)])]);

        assert!(match_offers(&sellers, &wants).is_empty());
    }

    #[test]
    fn no_overlap_yields_empty_table() {
        let wants = want_list(&[("ObscureCard", 1)]);
        let sellers = inventory_set(&[("A", &[("Bolt", 2)])]);

        assert!(match_offers(&sellers, &wants).is_empty());
    }

    #[test]
    fn missing_cards_keeps_want_list_order() {
        let wants = want_list(&[("Bolt", 1), ("ObscureCard", 1), ("RarerCard", 2)]);
        let sellers = inventory_set(&[("A", &[("Bolt", 2)])]);

        let table = match_offers(&sellers, &wants);
        let gaps = missing_cards(&wants, &table);

        assert_eq!(gaps, vec!["ObscureCard".to_string(), "RarerCard".to_string()]);
    }

    #[test]
    fn gaps_and_matches_partition_the_want_list() {
        let wants = want_list(&[("Bolt", 1), ("ObscureCard", 1)]);
        let sellers = inventory_set(&[("A", &[("Bolt", 2)])]);

        let table = match_offers(&sellers, &wants);
        let gaps = missing_cards(&wants, &table);

        assert_eq!(table.len() + gaps.len(), wants.len());
        for card in &gaps {
            assert!(!table.contains_key(card));
        }
    }
}
