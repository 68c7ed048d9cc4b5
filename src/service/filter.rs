use std::collections::HashSet;

use crate::model::{
    champion::{Champion, ChampionCollection},
    item::{Item, ItemCollection, SUMMONERS_RIFT},
};

/// Champions whose name contains `query`, ignoring case, in collection order.
pub fn filter_champions(collection: &ChampionCollection, query: &str) -> Vec<Champion> {
    let query = query.to_lowercase();
    collection
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Items carrying at least one enabled tag, optionally only those on Summoner's Rift.
/// Items sharing a name are shown once (the first in collection order wins); the
/// result is ordered by total gold cost, ties keeping collection order.
pub fn filter_items(collection: &ItemCollection, enabled_tags: &HashSet<&str>, rift_only: bool) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut visible = collection
        .iter()
        .filter(|i| i.tags.iter().any(|t| enabled_tags.contains(t.as_str())))
        .filter(|i| !rift_only || i.on_map(SUMMONERS_RIFT))
        .filter(|i| seen.insert(i.name.clone()))
        .cloned()
        .collect::<Vec<_>>();
    visible.sort_by_key(|i| i.gold_total);
    visible
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ahri_and_garen() -> ChampionCollection {
        vec![Champion::new("1", "Ahri"), Champion::new("2", "Garen")]
            .into_iter()
            .collect()
    }

    fn ids(champions: &[Champion]) -> Vec<&str> {
        champions.iter().map(|c| c.id.0.as_str()).collect()
    }

    #[test]
    fn substring_not_fuzzy() {
        let visible = filter_champions(&ahri_and_garen(), "ar");
        assert_eq!(ids(&visible), vec!["2"]);
        assert_eq!(visible[0].name, "Garen");
    }

    #[test]
    fn case_insensitive_keeps_order() {
        assert_eq!(ids(&filter_champions(&ahri_and_garen(), "a")), vec!["1", "2"]);
        assert_eq!(ids(&filter_champions(&ahri_and_garen(), "GAR")), vec!["2"]);
    }

    #[test]
    fn empty_query_is_everything() {
        assert_eq!(ids(&filter_champions(&ahri_and_garen(), "")), vec!["1", "2"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_champions(&ahri_and_garen(), "zed").is_empty());
    }

    #[test]
    fn localized_names_fold_case() {
        let collection: ChampionCollection = vec![Champion::new("Aurelion", "AURELION SOL"), Champion::new("Zoe", "Żoe")]
            .into_iter()
            .collect();
        assert_eq!(ids(&filter_champions(&collection, "żo")), vec!["Zoe"]);
        assert_eq!(ids(&filter_champions(&collection, "sol")), vec!["Aurelion"]);
    }

    fn collection_strategy() -> impl Strategy<Value = ChampionCollection> {
        prop::collection::vec("[a-zA-Z ]{0,12}", 0..20).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Champion::new(i.to_string(), name))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn result_is_exactly_the_matching_members_in_order(
            collection in collection_strategy(),
            query in "[a-zA-Z]{0,3}",
        ) {
            let visible = filter_champions(&collection, &query);
            let expected = collection
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&query.to_lowercase()))
                .cloned()
                .collect::<Vec<_>>();
            prop_assert_eq!(visible, expected);
        }

        #[test]
        fn empty_query_returns_full_collection(collection in collection_strategy()) {
            prop_assert_eq!(filter_champions(&collection, ""), collection.to_vec());
        }

        #[test]
        fn filtering_twice_is_stable(collection in collection_strategy(), query in "[a-z]{0,2}") {
            let once = filter_champions(&collection, &query);
            let again = filter_champions(&once.iter().cloned().collect(), &query);
            prop_assert_eq!(once, again);
        }
    }

    fn shop() -> ItemCollection {
        vec![
            Item::new("3031", "Infinity Edge", 3400).with_tags(&["Damage", "CriticalStrike"]).with_maps(&["11", "12"]),
            Item::new("1001", "Boots", 300).with_tags(&["Boots"]).with_maps(&["11", "12"]),
            Item::new("1036", "Long Sword", 350).with_tags(&["Damage"]).with_maps(&["11"]),
            Item::new("223031", "Infinity Edge", 3400).with_tags(&["Damage"]).with_maps(&["30"]),
            Item::new("2003", "Health Potion", 50).with_tags(&["Consumable"]).with_maps(&["12"]),
            Item::new("3340", "Stealth Ward", 0).with_maps(&["11"]),
        ]
        .into_iter()
        .collect()
    }

    fn item_ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.0.as_str()).collect()
    }

    #[test]
    fn items_sorted_by_gold_and_deduplicated_by_name() {
        let all = HashSet::from(["Damage", "CriticalStrike", "Boots", "Consumable"]);
        assert_eq!(
            item_ids(&filter_items(&shop(), &all, false)),
            vec!["2003", "1001", "1036", "3031"]
        );
    }

    #[test]
    fn rift_only_drops_other_maps() {
        let all = HashSet::from(["Damage", "CriticalStrike", "Boots", "Consumable"]);
        assert_eq!(item_ids(&filter_items(&shop(), &all, true)), vec!["1001", "1036", "3031"]);
    }

    #[test]
    fn duplicate_names_count_only_visible_items() {
        // Only the arena copy carries the enabled tag, so it is the one shown.
        let arena_only = HashSet::from(["Damage"]);
        let collection: ItemCollection = vec![
            Item::new("3031", "Infinity Edge", 3400).with_tags(&["CriticalStrike"]).with_maps(&["11"]),
            Item::new("223031", "Infinity Edge", 3400).with_tags(&["Damage"]).with_maps(&["30"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(item_ids(&filter_items(&collection, &arena_only, false)), vec!["223031"]);
        assert!(filter_items(&collection, &arena_only, true).is_empty());
    }

    #[test]
    fn untagged_items_and_disabled_tags_hide_items() {
        assert!(filter_items(&shop(), &HashSet::new(), false).is_empty());
        assert_eq!(item_ids(&filter_items(&shop(), &HashSet::from(["Boots"]), true)), vec!["1001"]);
    }

    fn shop_strategy() -> impl Strategy<Value = ItemCollection> {
        let item = ("[a-d]{1,2}", 0u32..5000, prop::sample::subsequence(vec!["A", "B", "C"], 0..=3), any::<bool>());
        prop::collection::vec(item, 0..25).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (name, gold, tags, rift))| {
                    let maps: &[&str] = if rift { &["11"] } else { &["12"] };
                    Item::new(i.to_string(), name, gold).with_tags(&tags).with_maps(maps)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn visible_items_are_unique_sorted_and_allowed(
            collection in shop_strategy(),
            enabled in prop::sample::subsequence(vec!["A", "B", "C"], 0..=3),
            rift_only in any::<bool>(),
        ) {
            let enabled = enabled.into_iter().collect::<HashSet<_>>();
            let visible = filter_items(&collection, &enabled, rift_only);

            let names = visible.iter().map(|i| i.name.as_str()).collect::<HashSet<_>>();
            prop_assert_eq!(names.len(), visible.len());
            prop_assert!(visible.windows(2).all(|w| w[0].gold_total <= w[1].gold_total));
            for item in &visible {
                prop_assert!(item.tags.iter().any(|t| enabled.contains(t.as_str())));
                prop_assert!(!rift_only || item.on_map(SUMMONERS_RIFT));
            }
        }
    }
}
