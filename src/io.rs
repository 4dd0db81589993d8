//! Loads deck sections and seller inventories from plain-text card lists.
//!
//! List format is one card per line: quantity, a single space, card name.
//! Blank lines and a bare `Deck` separator are skipped. Basic lands are
//! filtered out during load so the planner never sees them.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::error::LoadError;
use crate::models::{Inventory, InventorySet, WantList};

const BASIC_LANDS: [&str; 5] = ["plains", "island", "swamp", "mountain", "forest"];

fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS
        .iter()
        .any(|land| name.eq_ignore_ascii_case(land))
}

/// Parses a `<quantity> <card name>` line. Returns `None` for lines that
/// do not follow the format; the caller decides whether that is an error.
fn parse_card_line(line: &str) -> Option<(u32, &str)> {
    let (quantity, name) = line.trim().split_once(' ')?;
    let quantity: u32 = quantity.parse().ok()?;
    let name = name.trim();
    if quantity == 0 || name.is_empty() {
        return None;
    }
    Some((quantity, name))
}

fn list_name(path: &Path) -> Result<String, LoadError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| LoadError::UnnamedList {
            path: path.to_path_buf(),
        })
}

fn read_card_lines(path: &Path) -> Result<IndexMap<String, u32>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = io::BufReader::new(file);
    let mut cards = IndexMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() || line.trim() == "Deck" {
            continue;
        }

        let (quantity, name) = parse_card_line(&line).ok_or_else(|| LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: index + 1,
            content: line.clone(),
        })?;
        if is_basic_land(name) {
            continue;
        }
        cards.insert(name.to_string(), quantity);
    }

    Ok(cards)
}

/// Reads one deck section. The section name is the file stem
/// (`Mainboard.txt` becomes `Mainboard`).
pub fn read_want_list(path: &Path) -> Result<WantList, LoadError> {
    let name = list_name(path)?;
    let cards = read_card_lines(path)?;
    log::debug!("loaded want list {name:?}: {} cards", cards.len());
    Ok(WantList { name, cards })
}

/// Reads every file under `dir` (recursively) as one seller inventory per
/// file, seller id taken from the file stem. Entries are visited in file
/// name order so seller registration order is reproducible.
pub fn read_inventory_set(dir: &Path) -> Result<InventorySet, LoadError> {
    let mut inventories = InventorySet::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::Io {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source: source.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let seller = list_name(path)?;
        let inventory: Inventory = read_card_lines(path)?;
        log::debug!("loaded seller {seller:?}: {} cards", inventory.len());
        inventories.register(seller, inventory);
    }

    log::info!(
        "loaded {} seller inventories from {}",
        inventories.len(),
        dir.display()
    );
    Ok(inventories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quantity_and_name() {
        assert_eq!(parse_card_line("4 Lightning Bolt"), Some((4, "Lightning Bolt")));
    }

    #[test]
    fn name_keeps_inner_spaces() {
        assert_eq!(
            parse_card_line("1 Jace, the Mind Sculptor"),
            Some((1, "Jace, the Mind Sculptor"))
        );
    }

    #[test]
    fn rejects_missing_name() {
        assert_eq!(parse_card_line("4"), None);
        assert_eq!(parse_card_line("4 "), None);
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        assert_eq!(parse_card_line("abc Lightning Bolt"), None);
    }

    #[test]
    fn rejects_zero_and_negative_quantity() {
        assert_eq!(parse_card_line("0 Lightning Bolt"), None);
        assert_eq!(parse_card_line("-2 Lightning Bolt"), None);
    }

    #[test]
    fn basic_lands_match_case_insensitively() {
        assert!(is_basic_land("Plains"));
        assert!(is_basic_land("ISLAND"));
        assert!(is_basic_land("forest"));
        assert!(!is_basic_land("Snow-Covered Plains"));
    }
}
