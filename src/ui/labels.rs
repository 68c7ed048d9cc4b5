use crate::model::ids::LanguageCode;

/// Interface text for one display language.
#[derive(Debug)]
pub struct Labels {
    pub search: &'static str,
    pub choose_language: &'static str,
    pub champions: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub skills: &'static str,
    pub skins: &'static str,
    pub help: &'static str,
    pub details_help: &'static str,
    pub items: &'static str,
    pub items_loading: &'static str,
    pub items_empty: &'static str,
    pub tags: &'static str,
    pub rift_only: &'static str,
    pub gold: &'static str,
    pub sell: &'static str,
    pub items_help: &'static str,
}

static EN_US: Labels = Labels {
    search: "Search for Champion:",
    choose_language: "Choose Language:",
    champions: "Champions",
    loading: "Loading champions...",
    empty: "No champions to show.",
    skills: "Skills",
    skins: "Skins",
    help: "Type to filter, arrows to move, Enter for details, Tab to switch language, F2 for items, F5 to reload, Esc to quit.",
    details_help: "Use ↑/↓ to scroll, Esc to return.",
    items: "Items",
    items_loading: "Loading items...",
    items_empty: "No items to show.",
    tags: "Tags:",
    rift_only: "Map 11 only",
    gold: "Gold",
    sell: "sells for",
    items_help: "[ ] to pick a tag, Space to toggle it, M for Map 11 only, Enter for details, F2 for champions, Esc to quit.",
};

static PL_PL: Labels = Labels {
    search: "Wyszukaj bohatera:",
    choose_language: "Wybierz język:",
    champions: "Bohaterowie",
    loading: "Ładowanie bohaterów...",
    empty: "Brak bohaterów do wyświetlenia.",
    skills: "Umiejętności",
    skins: "Skórki",
    help: "Pisz, aby filtrować, strzałki do wyboru, Enter - szczegóły, Tab - zmiana języka, F2 - przedmioty, F5 - odśwież, Esc - wyjście.",
    details_help: "Użyj ↑/↓, aby przewijać, Esc, aby wrócić.",
    items: "Przedmioty",
    items_loading: "Ładowanie przedmiotów...",
    items_empty: "Brak przedmiotów do wyświetlenia.",
    tags: "Tagi:",
    rift_only: "Tylko mapa 11",
    gold: "Złoto",
    sell: "sprzedaż za",
    items_help: "[ ] - wybór tagu, Spacja - przełącz, M - tylko mapa 11, Enter - szczegóły, F2 - bohaterowie, Esc - wyjście.",
};

/// Unknown or missing codes fall back to English.
pub fn labels_for(language: Option<&LanguageCode>) -> &'static Labels {
    match language.map(LanguageCode::as_str) {
        Some("pl_PL") => &PL_PL,
        _ => &EN_US,
    }
}
