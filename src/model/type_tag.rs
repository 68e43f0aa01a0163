//! Record type tags encoded as id prefixes.
//!
//! Every record id starts with a short tag naming its type, e.g.
//! `facility_laboratory` or `mec_class_jaeger`. The tag decides which
//! group a search hit is listed under.

use std::fmt;

/// Known record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// Base facility (`facility`).
    Facility,
    /// Foundry project (`foundry`).
    Foundry,
    /// Gene modification (`gene_mod`).
    GeneMod,
    /// Infantry soldier class (`infantry_class`).
    InfantryClass,
    /// Equipment item (`item`).
    Item,
    /// MEC trooper class (`mec_class`).
    MecClass,
    /// Mission map (`map`).
    Map,
    /// Soldier perk (`perk`).
    Perk,
    /// Psionic ability (`psi`).
    Psi,
    /// Research project (`research`).
    Research,
    /// UFO type (`ufo`).
    Ufo,
}

/// Label for hits whose id matches no known prefix.
pub const UNCLASSIFIED_LABEL: &str = "Other";

/// Prefix table, scanned once per id. The longest matching prefix wins,
/// so table order only matters for readability.
const TYPE_TAGS: [(&str, TypeTag); 11] = [
    ("facility", TypeTag::Facility),
    ("foundry", TypeTag::Foundry),
    ("gene_mod", TypeTag::GeneMod),
    ("infantry_class", TypeTag::InfantryClass),
    ("item", TypeTag::Item),
    ("mec_class", TypeTag::MecClass),
    ("map", TypeTag::Map),
    ("perk", TypeTag::Perk),
    ("psi", TypeTag::Psi),
    ("research", TypeTag::Research),
    ("ufo", TypeTag::Ufo),
];

impl TypeTag {
    /// All tags in table order.
    pub fn all() -> impl Iterator<Item = TypeTag> {
        TYPE_TAGS.iter().map(|(_, tag)| *tag)
    }

    /// Classify an id by the longest known prefix it starts with.
    ///
    /// Returns `None` when no prefix matches (including the empty id).
    pub fn classify(id: &str) -> Option<TypeTag> {
        TYPE_TAGS
            .iter()
            .filter(|(prefix, _)| id.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, tag)| *tag)
    }

    /// The id prefix for this tag.
    pub fn prefix(self) -> &'static str {
        TYPE_TAGS
            .iter()
            .find(|(_, tag)| *tag == self)
            .map(|(prefix, _)| *prefix)
            .unwrap_or_default()
    }

    /// Human-readable group label. Infantry and MEC classes share "Class".
    pub fn group_label(self) -> &'static str {
        match self {
            TypeTag::Facility => "Base Facility",
            TypeTag::Foundry => "Foundry Project",
            TypeTag::GeneMod => "Gene Mod",
            TypeTag::InfantryClass | TypeTag::MecClass => "Class",
            TypeTag::Item => "Item",
            TypeTag::Map => "Map",
            TypeTag::Perk => "Perk",
            TypeTag::Psi => "Psi Ability",
            TypeTag::Research => "Research",
            TypeTag::Ufo => "UFO",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Group label for an id, falling back to [`UNCLASSIFIED_LABEL`].
pub fn group_label_for(id: &str) -> &'static str {
    TypeTag::classify(id)
        .map(TypeTag::group_label)
        .unwrap_or(UNCLASSIFIED_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_known_prefix() {
        for tag in TypeTag::all() {
            let id = format!("{}_example", tag.prefix());
            assert_eq!(TypeTag::classify(&id), Some(tag), "id {id}");
        }
    }

    #[test]
    fn unknown_prefix_is_unclassified() {
        assert_eq!(TypeTag::classify("weapon_plasma"), None);
        assert_eq!(TypeTag::classify(""), None);
        assert_eq!(group_label_for("weapon_plasma"), UNCLASSIFIED_LABEL);
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert_eq!(TypeTag::classify("Item_1"), None);
    }

    #[test]
    fn class_tags_share_a_label() {
        assert_eq!(group_label_for("infantry_class_sniper"), "Class");
        assert_eq!(group_label_for("mec_class_jaeger"), "Class");
    }

    #[test]
    fn labels_match_table() {
        assert_eq!(group_label_for("facility_lab"), "Base Facility");
        assert_eq!(group_label_for("foundry_sabot"), "Foundry Project");
        assert_eq!(group_label_for("gene_mod_eyes"), "Gene Mod");
        assert_eq!(group_label_for("item_medikit"), "Item");
        assert_eq!(group_label_for("map_dam"), "Map");
        assert_eq!(group_label_for("perk_squadsight"), "Perk");
        assert_eq!(group_label_for("psi_mindfray"), "Psi Ability");
        assert_eq!(group_label_for("research_xenobiology"), "Research");
        assert_eq!(group_label_for("ufo_scout"), "UFO");
    }

    #[test]
    fn prefix_without_separator_still_matches() {
        // The tag is a raw prefix, not a delimited token.
        assert_eq!(TypeTag::classify("items"), Some(TypeTag::Item));
        assert_eq!(TypeTag::classify("psionics"), Some(TypeTag::Psi));
    }

    #[test]
    fn display_is_prefix() {
        assert_eq!(TypeTag::GeneMod.to_string(), "gene_mod");
    }
}
