use std::{collections::HashSet, sync::Arc};

use crate::model::{
    champion::{Champion, ChampionCollection},
    ids::LanguageCode,
    item::{Item, ItemCollection},
};

use super::filter::{filter_champions, filter_items};

/// Everything the grid is drawn from. Transitions return a new state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserState {
    collection: Arc<ChampionCollection>,
    visible: Vec<Champion>,
    query: String,
    language: Option<LanguageCode>,
}

impl BrowserState {
    /// A freshly loaded collection; the filter is reset.
    pub fn with_collection(&self, language: Option<LanguageCode>, collection: ChampionCollection) -> Self {
        Self {
            visible: collection.to_vec(),
            collection: Arc::new(collection),
            query: String::new(),
            language,
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            visible: filter_champions(&self.collection, query),
            query: query.to_string(),
            language: self.language.clone(),
        }
    }

    pub fn collection(&self) -> &ChampionCollection {
        &self.collection
    }

    pub fn visible(&self) -> &[Champion] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToggle {
    pub name: String,
    pub enabled: bool,
}

/// Everything the item grid is drawn from. Transitions return a new state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemState {
    collection: Arc<ItemCollection>,
    tags: Vec<TagToggle>,
    rift_only: bool,
    visible: Vec<Item>,
    language: Option<LanguageCode>,
}

impl Default for ItemState {
    fn default() -> Self {
        Self {
            collection: Arc::default(),
            tags: Vec::new(),
            rift_only: true,
            visible: Vec::new(),
            language: None,
        }
    }
}

impl ItemState {
    /// A freshly loaded collection. Tags seen before keep their toggle, new ones start enabled.
    pub fn with_collection(&self, language: Option<LanguageCode>, collection: ItemCollection) -> Self {
        let tags = collection
            .tags()
            .into_iter()
            .map(|name| {
                let enabled = self.tags.iter().find(|t| t.name == name).map_or(true, |t| t.enabled);
                TagToggle { name, enabled }
            })
            .collect();

        Self {
            collection: Arc::new(collection),
            tags,
            rift_only: self.rift_only,
            visible: Vec::new(),
            language,
        }
        .refiltered()
    }

    /// Flips the tag at `index`; out of range leaves the state as it is.
    pub fn with_tag_toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(tag) = next.tags.get_mut(index) {
            tag.enabled = !tag.enabled;
        }
        next.refiltered()
    }

    pub fn with_rift_only(&self, rift_only: bool) -> Self {
        Self {
            rift_only,
            ..self.clone()
        }
        .refiltered()
    }

    fn refiltered(mut self) -> Self {
        let enabled = self
            .tags
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.name.as_str())
            .collect::<HashSet<_>>();
        self.visible = filter_items(&self.collection, &enabled, self.rift_only);
        self
    }

    pub fn collection(&self) -> &ItemCollection {
        &self.collection
    }

    pub fn tags(&self) -> &[TagToggle] {
        &self.tags
    }

    pub fn rift_only(&self) -> bool {
        self.rift_only
    }

    pub fn visible(&self) -> &[Item] {
        &self.visible
    }

    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }
}
