use crate::model::{card::Card, champion::Champion, item::Item};

pub const DEFAULT_IMAGE_HOST: &str = "ddragon.leagueoflegends.com";

/// Display surface for the grid. `present` replaces whatever was shown before.
pub trait Presenter {
    fn present(&mut self, cards: &[Card]);
}

/// Builds image URLs of the form `https://<host>/cdn/img/champion/<id>.jpg`
/// and `https://<host>/cdn/img/item/<id>.png`.
#[derive(Debug, Clone)]
pub struct ImageTemplate {
    host: String,
}

impl ImageTemplate {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, champion: &Champion) -> String {
        format!("https://{}/cdn/img/champion/{}.jpg", self.host, champion.id)
    }

    pub fn item_url_for(&self, item: &Item) -> String {
        format!("https://{}/cdn/img/item/{}.png", self.host, item.id)
    }
}

impl Default for ImageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOST)
    }
}

pub fn cards_for(visible: &[Champion], images: &ImageTemplate) -> Vec<Card> {
    visible
        .iter()
        .map(|champ| Card {
            id: champ.id.0.clone(),
            label: champ.name.clone(),
            image_url: images.url_for(champ),
            image_alt: champ.name.clone(),
        })
        .collect()
}

pub fn item_cards_for(visible: &[Item], images: &ImageTemplate) -> Vec<Card> {
    visible
        .iter()
        .map(|item| Card {
            id: item.id.0.clone(),
            label: format!("{} ({}g)", item.name, item.gold_total),
            image_url: images.item_url_for(item),
            image_alt: item.name.clone(),
        })
        .collect()
}

pub fn render<P: Presenter + ?Sized>(presenter: &mut P, visible: &[Champion], images: &ImageTemplate) {
    presenter.present(&cards_for(visible, images));
}

pub fn render_items<P: Presenter + ?Sized>(presenter: &mut P, visible: &[Item], images: &ImageTemplate) {
    presenter.present(&item_cards_for(visible, images));
}
