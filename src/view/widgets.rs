//! Navigation widgets built from data objects.

use ratatui::style::Style;
use ratatui::text::Span;
use serde_json::Value;

use crate::model::ResultItem;

/// Anchor-like link to another record inside the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppLink {
    /// Id of the record the link points at.
    pub target_id: String,
    /// Link text.
    pub text: String,
    /// Plain-text summary of the record's fields, one `key: value` per line.
    pub details: String,
}

impl InAppLink {
    /// Build a link for a search hit.
    ///
    /// Nameless records fall back to their id as link text.
    pub fn from_item(item: &ResultItem) -> Self {
        let text = if item.name.is_empty() {
            item.id.clone()
        } else {
            item.name.clone()
        };

        let mut details = vec![format!("id: {}", item.id)];
        details.extend(
            item.fields
                .iter()
                .map(|(key, value)| format!("{key}: {}", display_value(value))),
        );

        Self {
            target_id: item.id.clone(),
            text,
            details: details.join("\n"),
        }
    }

    /// Render the link text as a styled span.
    pub fn span(&self, style: Style) -> Span<'static> {
        Span::styled(self.text.clone(), style)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_uses_name_and_id() {
        let item = ResultItem::new("item_medikit", "Medikit");
        let link = InAppLink::from_item(&item);

        assert_eq!(link.target_id, "item_medikit");
        assert_eq!(link.text, "Medikit");
        assert_eq!(link.details, "id: item_medikit");
    }

    #[test]
    fn nameless_item_links_by_id() {
        let link = InAppLink::from_item(&ResultItem::new("perk_mystery", ""));
        assert_eq!(link.text, "perk_mystery");
    }

    #[test]
    fn details_list_extra_fields_without_quotes() {
        let item = ResultItem::new("ufo_scout", "Scout")
            .with_field("size", "small")
            .with_field("hp", 20);
        let link = InAppLink::from_item(&item);

        assert_eq!(link.details, "id: ufo_scout\nhp: 20\nsize: small");
    }
}
