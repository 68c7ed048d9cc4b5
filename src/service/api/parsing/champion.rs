use json::{object::Object, JsonValue};

use crate::model::champion::{Champion, ChampionCollection};

use super::{records, ParsingError};

pub fn parse_champions(json: &JsonValue) -> Result<ChampionCollection, ParsingError> {
    if let JsonValue::Object(obj) = records(json) {
        let mut champions = Vec::with_capacity(obj.len());
        for (key, entry) in obj.iter() {
            if let JsonValue::Object(champ_obj) = entry {
                champions.push(parse_champ_obj(key, champ_obj)?);
            } else {
                return Err(ParsingError::InvalidType(key.into()));
            }
        }

        return Ok(ChampionCollection::new(champions));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_champ_obj(key: &str, obj: &Object) -> Result<Champion, ParsingError> {
    let id = match obj.get("id") {
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(value) => value
            .as_str()
            .ok_or(ParsingError::InvalidType(format!("{}.id", key)))?
            .to_string(),
        None => return Err(ParsingError::InvalidType(format!("{}.id", key))),
    };
    let name = obj
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or(ParsingError::InvalidType(format!("{}.name", key)))?;

    let mut extra = JsonValue::Object(obj.clone());
    extra.remove("id");
    extra.remove("name");

    let mut champion = Champion::new(id, name);
    champion.extra = extra;
    Ok(champion)
}
