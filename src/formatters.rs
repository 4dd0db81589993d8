//! Console report formatting for one deck section.

use crate::models::{BuyPlan, CoverageRanking, GapList, MatchTable, WantList};

const BORDER_WIDTH: usize = 40;

/// Renders everything known about one section: how much of it sellers can
/// cover, who offers what, what nobody has, the overall seller ranking and
/// the final buy plan.
pub fn format_section_report(
    wants: &WantList,
    table: &MatchTable,
    gaps: &GapList,
    ranking: &CoverageRanking,
    plan: &BuyPlan,
) -> String {
    let border = "-".repeat(BORDER_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{border} {} {border}\n", wants.name));
    output.push_str(&format!(
        "Sellers collectively have {} / {} cards from {}\n\n",
        table.len(),
        wants.len(),
        wants.name
    ));

    output.push_str("Available cards:\n");
    if table.is_empty() {
        output.push_str("    (none)\n");
    }
    for (card, offers) in table {
        output.push_str(&format!("{card}:\n"));
        for offer in offers {
            output.push_str(&format!(
                "    {} x from {}\n",
                offer.quantity, offer.seller
            ));
        }
    }
    output.push('\n');

    output.push_str(&format!("Missing cards in {}:\n", wants.name));
    if gaps.is_empty() {
        output.push_str("    (none)\n");
    }
    for card in gaps {
        output.push_str(&format!("    {card}\n"));
    }
    output.push('\n');

    output.push_str(&format!("Sellers with the most {} cards:\n", wants.name));
    for entry in ranking {
        output.push_str(&format!("    {}: {} cards\n", entry.seller, entry.count));
    }
    output.push('\n');

    output.push_str(&format!("{} buylist:\n", wants.name));
    if plan.is_empty() {
        output.push_str("    (nothing to buy)\n");
    }
    for (seller, entries) in plan {
        output.push_str(&format!("{seller}:\n"));
        for entry in entries {
            output.push_str(&format!("    {} x {}\n", entry.quantity, entry.name));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{match_offers, missing_cards};
    use crate::models::InventorySet;
    use crate::planner::plan_buylist;
    use crate::ranking::rank_sellers;

    fn render_fixture() -> String {
        let mut sellers = InventorySet::new();
        sellers.register("A", [("Bolt".to_string(), 2)].into_iter().collect());
        let wants = WantList {
            name: "Mainboard".to_string(),
            cards: [("Bolt".to_string(), 1), ("ObscureCard".to_string(), 1)]
                .into_iter()
                .collect(),
        };

        let table = match_offers(&sellers, &wants);
        let gaps = missing_cards(&wants, &table);
        let ranking = rank_sellers(&sellers, &table);
        let plan = plan_buylist(&table, &sellers).unwrap();
        format_section_report(&wants, &table, &gaps, &ranking, &plan)
    }

    #[test]
    fn shows_coverage_summary() {
        let output = render_fixture();
        assert!(output.contains("Sellers collectively have 1 / 2 cards from Mainboard"));
    }

    #[test]
    fn lists_offers_missing_cards_and_buylist() {
        let output = render_fixture();
        assert!(output.contains("2 x from A"));
        assert!(output.contains("ObscureCard"));
        assert!(output.contains("A: 1 cards"));
        assert!(output.contains("2 x Bolt"));
    }

    #[test]
    fn empty_section_renders_placeholders() {
        let wants = WantList::new("Considering");
        let output = format_section_report(
            &wants,
            &MatchTable::new(),
            &Vec::new(),
            &Vec::new(),
            &BuyPlan::new(),
        );

        assert!(output.contains("Sellers collectively have 0 / 0 cards"));
        assert!(output.contains("(none)"));
        assert!(output.contains("(nothing to buy)"));
    }
}
