use tracing::{debug, error, info};

use crate::model::{ids::LanguageCode, item::ItemCollection};

use super::{
    loader::{LoadOutcome, LoadTicket, Loader},
    render::{render_items, ImageTemplate, Presenter},
    state::ItemState,
};

/// Item counterpart of `Browser`: tag and map toggles instead of a text query.
pub struct ItemBrowser<P: Presenter> {
    state: ItemState,
    loader: Loader<ItemCollection>,
    presenter: P,
    images: ImageTemplate,
    awaiting: Option<LoadTicket>,
}

impl<P: Presenter> ItemBrowser<P> {
    pub fn new(loader: Loader<ItemCollection>, presenter: P, images: ImageTemplate) -> Self {
        Self {
            state: ItemState::default(),
            loader,
            presenter,
            images,
            awaiting: None,
        }
    }

    pub fn load(&mut self, language: Option<LanguageCode>) -> LoadTicket {
        let ticket = self.loader.load(language);
        self.awaiting = Some(ticket);
        ticket
    }

    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.loader.completed() {
            changed |= self.apply(outcome);
        }
        changed
    }

    fn apply(&mut self, outcome: LoadOutcome<ItemCollection>) -> bool {
        let LoadOutcome {
            ticket,
            language,
            result,
        } = outcome;
        let lang = language.as_ref().map(LanguageCode::as_str).unwrap_or("default");

        if !self.loader.is_latest(ticket) {
            debug!(%ticket, language = lang, "discarding superseded item load");
            return false;
        }
        self.awaiting = None;

        match result {
            Ok(items) => {
                info!(%ticket, language = lang, count = items.len(), "items loaded");
                self.state = self.state.with_collection(language, items);
                self.render();
                true
            }
            Err(err) => {
                error!(%ticket, language = lang, error = %err, "failed to load items");
                false
            }
        }
    }

    pub fn toggle_tag(&mut self, index: usize) {
        self.state = self.state.with_tag_toggled(index);
        debug!(index, visible = self.state.visible().len(), "item tag toggled");
        self.render();
    }

    pub fn toggle_rift_only(&mut self) {
        self.state = self.state.with_rift_only(!self.state.rift_only());
        debug!(rift_only = self.state.rift_only(), "map filter toggled");
        self.render();
    }

    pub fn render(&mut self) {
        render_items(&mut self.presenter, self.state.visible(), &self.images);
    }

    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn state(&self) -> &ItemState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[cfg(test)]
    fn wait_and_apply(&mut self) -> bool {
        let outcome = self
            .loader
            .wait(std::time::Duration::from_secs(5))
            .expect("load did not finish");
        self.apply(outcome)
    }
}
