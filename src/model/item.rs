use std::collections::BTreeSet;

use json::JsonValue;

use super::ids::ItemId;

/// Map id of Summoner's Rift in Data Dragon item records.
pub const SUMMONERS_RIFT: &str = "11";

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub gold_total: u32,
    pub tags: Vec<String>,
    /// Ids of the maps the item is available on.
    pub maps: Vec<String>,
    /// Every other field of the record, untouched.
    pub extra: JsonValue,
}

/// Items for one display language, in response order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemCollection {
    items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub plaintext: Option<String>,
    pub description: Option<String>,
    pub gold_sell: Option<u32>,
}

impl ItemCollection {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Every tag used by at least one item, sorted.
    pub fn tags(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|i| i.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<Item> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, gold_total: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gold_total,
            tags: Vec::new(),
            maps: Vec::new(),
            extra: JsonValue::new_object(),
        }
    }

    #[cfg(test)]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    #[cfg(test)]
    pub fn with_maps(mut self, maps: &[&str]) -> Self {
        self.maps = maps.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn on_map(&self, map: &str) -> bool {
        self.maps.iter().any(|m| m == map)
    }

    pub fn details(&self) -> ItemDetails {
        let text = |key: &str| {
            self.extra[key]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        ItemDetails {
            plaintext: text("plaintext"),
            description: text("description"),
            gold_sell: self.extra["gold"]["sell"].as_u32(),
        }
    }
}
