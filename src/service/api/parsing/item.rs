use json::{object::Object, JsonValue};

use crate::model::item::{Item, ItemCollection};

use super::{records, ParsingError};

/// Item records are keyed by id; the key is the only place the id appears.
pub fn parse_items(json: &JsonValue) -> Result<ItemCollection, ParsingError> {
    if let JsonValue::Object(obj) = records(json) {
        let mut items = Vec::with_capacity(obj.len());
        for (key, entry) in obj.iter() {
            if let JsonValue::Object(item_obj) = entry {
                items.push(parse_item_obj(key, item_obj)?);
            } else {
                return Err(ParsingError::InvalidType(key.into()));
            }
        }

        return Ok(ItemCollection::new(items));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_item_obj(key: &str, obj: &Object) -> Result<Item, ParsingError> {
    let name = obj
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or(ParsingError::InvalidType(format!("{}.name", key)))?;
    let gold_total = obj
        .get("gold")
        .and_then(|gold| gold["total"].as_u32())
        .ok_or(ParsingError::InvalidType(format!("{}.gold.total", key)))?;

    let tags = match obj.get("tags") {
        None => Vec::new(),
        Some(JsonValue::Array(tags)) => tags
            .iter()
            .map(|t| t.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(ParsingError::InvalidType(format!("{}.tags", key)))?,
        Some(_) => return Err(ParsingError::InvalidType(format!("{}.tags", key))),
    };

    let maps = match obj.get("maps") {
        None => Vec::new(),
        Some(JsonValue::Object(maps)) => maps
            .iter()
            .filter(|(_, available)| available.as_bool() == Some(true))
            .map(|(map, _)| map.to_string())
            .collect(),
        Some(_) => return Err(ParsingError::InvalidType(format!("{}.maps", key))),
    };

    let mut extra = JsonValue::Object(obj.clone());
    extra.remove("name");
    extra.remove("tags");
    extra.remove("maps");

    let mut item = Item::new(key, name, gold_total);
    item.tags = tags;
    item.maps = maps;
    item.extra = extra;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::SUMMONERS_RIFT;

    #[test]
    fn parses_data_dragon_item_payload() {
        let json = json::parse(
            r#"{"type": "item", "version": "14.1.1", "basic": {"name": ""},
                "data": {
                    "3031": {"name": "Infinity Edge", "plaintext": "Crits",
                             "gold": {"base": 1225, "total": 3400, "sell": 2380},
                             "tags": ["Damage", "CriticalStrike"],
                             "maps": {"11": true, "12": true, "30": false}},
                    "1001": {"name": "Boots", "gold": {"total": 300},
                             "tags": ["Boots"], "maps": {"11": false}}
                }}"#,
        )
        .unwrap();

        let items = parse_items(&json).unwrap();
        let ids = items.iter().map(|i| i.id.0.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["3031", "1001"]);

        let edge = items.get(&"3031".into()).unwrap();
        assert_eq!(edge.name, "Infinity Edge");
        assert_eq!(edge.gold_total, 3400);
        assert_eq!(edge.tags, vec!["Damage", "CriticalStrike"]);
        assert_eq!(edge.maps, vec!["11", "12"]);
        assert_eq!(edge.extra["plaintext"], "Crits");
        assert!(edge.extra["name"].is_null());

        assert!(!items.get(&"1001".into()).unwrap().on_map(SUMMONERS_RIFT));
    }

    #[test]
    fn tags_and_maps_are_optional() {
        let json = json::parse(r#"{"2003": {"name": "Health Potion", "gold": {"total": 50}}}"#).unwrap();
        let item = parse_items(&json).unwrap().iter().next().cloned().unwrap();
        assert!(item.tags.is_empty());
        assert!(item.maps.is_empty());
    }

    #[test]
    fn rejects_wrong_shapes() {
        for body in [
            r#"[{"name": "Boots"}]"#,
            r#"{"1001": "Boots"}"#,
            r#"{"1001": {"gold": {"total": 300}}}"#,
            r#"{"1001": {"name": "Boots"}}"#,
            r#"{"1001": {"name": "Boots", "gold": {"total": "300"}}}"#,
            r#"{"1001": {"name": "Boots", "gold": {"total": 300}, "tags": "Boots"}}"#,
            r#"{"1001": {"name": "Boots", "gold": {"total": 300}, "tags": [1]}}"#,
        ] {
            let json = json::parse(body).unwrap();
            assert!(parse_items(&json).is_err(), "accepted {}", body);
        }
    }
}
