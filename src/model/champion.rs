use json::JsonValue;

use super::ids::ChampionId;

#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    /// Every other field of the record, untouched.
    pub extra: JsonValue,
}

/// Champions for one display language, in response order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChampionCollection {
    champions: Vec<Champion>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChampionDetails {
    pub title: Option<String>,
    pub blurb: Option<String>,
    pub tags: Vec<String>,
    pub spells: Vec<(String, String)>,
    pub skins: Vec<String>,
}

impl ChampionCollection {
    pub fn new(champions: Vec<Champion>) -> Self {
        Self { champions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.iter()
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn get(&self, id: &ChampionId) -> Option<&Champion> {
        self.champions.iter().find(|c| &c.id == id)
    }

    pub fn to_vec(&self) -> Vec<Champion> {
        self.champions.clone()
    }
}

impl FromIterator<Champion> for ChampionCollection {
    fn from_iter<I: IntoIterator<Item = Champion>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Champion {
    pub fn new(id: impl Into<ChampionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: JsonValue::new_object(),
        }
    }

    pub fn details(&self) -> ChampionDetails {
        let text = |key: &str| self.extra[key].as_str().map(str::to_string);

        ChampionDetails {
            title: text("title"),
            blurb: text("blurb"),
            tags: self.extra["tags"]
                .members()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect(),
            spells: self.extra["spells"]
                .members()
                .filter_map(|s| {
                    let name = s["name"].as_str()?;
                    let description = s["description"].as_str().unwrap_or("");
                    Some((name.to_string(), description.to_string()))
                })
                .collect(),
            skins: self.extra["skins"]
                .members()
                .filter_map(|s| s["name"].as_str().map(str::to_string))
                .collect(),
        }
    }
}
