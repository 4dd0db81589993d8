//! Compares deck want lists against seller inventories and plans which
//! sellers to buy from, greedily minimizing the number of distinct sellers.

pub mod error;
pub mod formatters;
pub mod io;
pub mod matching;
pub mod models;
pub mod planner;
pub mod ranking;

// Re-export commonly used items
pub use error::{LoadError, PlanError};
pub use formatters::format_section_report;
pub use io::{read_inventory_set, read_want_list};
pub use matching::{match_offers, missing_cards};
pub use models::{
    BuyEntry, BuyPlan, CoverageRanking, GapList, Inventory, InventorySet, MatchTable, SellerCoverage,
    SellerOffer, WantList,
};
pub use planner::plan_buylist;
pub use ranking::rank_sellers;
