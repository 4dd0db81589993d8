use indexmap::IndexMap;

/// One deck section's wanted cards (e.g. "Mainboard" or "Considering").
///
/// Card names map to the requested quantity. Iteration order is the order
/// the cards appeared in the source list; a repeated card name overwrites
/// the quantity but keeps its original position.
#[derive(Debug, Clone)]
pub struct WantList {
    pub name: String,
    pub cards: IndexMap<String, u32>,
}

impl WantList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One seller's stock: card name to available quantity.
pub type Inventory = IndexMap<String, u32>;

/// All discovered seller inventories, keyed by seller id.
///
/// Iteration order is registration order, which doubles as the tie-break
/// order everywhere sellers are ranked. Callers must register sellers in a
/// reproducible order if they want reproducible plans.
#[derive(Debug, Clone, Default)]
pub struct InventorySet {
    pub sellers: IndexMap<String, Inventory>,
}

impl InventorySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, seller: impl Into<String>, inventory: Inventory) {
        self.sellers.insert(seller.into(), inventory);
    }

    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }
}

/// One seller's offer for a single wanted card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerOffer {
    pub seller: String,
    pub quantity: u32,
}

/// Wanted cards mapped to every seller stocking them.
///
/// A card is present iff at least one seller stocks it; its offers are in
/// seller registration order.
pub type MatchTable = IndexMap<String, Vec<SellerOffer>>;

/// A seller's coverage count over some set of matched cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerCoverage {
    pub seller: String,
    pub count: usize,
}

/// All sellers ordered by coverage count, descending. Ties keep
/// registration order.
pub type CoverageRanking = Vec<SellerCoverage>;

/// A single line of a seller's buy list: card name and the quantity that
/// seller has in stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyEntry {
    pub name: String,
    pub quantity: u32,
}

/// The final assignment of matched cards to sellers. Every matched card
/// appears in exactly one seller's list.
pub type BuyPlan = IndexMap<String, Vec<BuyEntry>>;

/// Wanted cards no seller stocks, in want-list order.
pub type GapList = Vec<String>;
