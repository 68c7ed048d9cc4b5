use tracing::{debug, error, info};

use crate::model::{champion::ChampionCollection, ids::LanguageCode};

use super::{
    loader::{LoadOutcome, LoadTicket, Loader},
    render::{render, ImageTemplate, Presenter},
    state::BrowserState,
};

/// Owns the browser state and drives loader, filter and presenter.
pub struct Browser<P: Presenter> {
    state: BrowserState,
    loader: Loader<ChampionCollection>,
    presenter: P,
    images: ImageTemplate,
    awaiting: Option<LoadTicket>,
}

impl<P: Presenter> Browser<P> {
    pub fn new(loader: Loader<ChampionCollection>, presenter: P, images: ImageTemplate) -> Self {
        Self {
            state: BrowserState::default(),
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

    /// Applies finished loads; returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.loader.completed() {
            changed |= self.apply(outcome);
        }
        changed
    }

    fn apply(&mut self, outcome: LoadOutcome<ChampionCollection>) -> bool {
        let LoadOutcome {
            ticket,
            language,
            result,
        } = outcome;
        let lang = language.as_ref().map(LanguageCode::as_str).unwrap_or("default");

        if !self.loader.is_latest(ticket) {
            debug!(%ticket, language = lang, "discarding superseded champion load");
            return false;
        }
        self.awaiting = None;

        match result {
            Ok(collection) => {
                info!(%ticket, language = lang, count = collection.len(), "champions loaded");
                self.state = self.state.with_collection(language, collection);
                self.render();
                true
            }
            Err(err) => {
                error!(%ticket, language = lang, error = %err, "failed to load champions");
                false
            }
        }
    }

    pub fn filter(&mut self, query: &str) {
        self.state = self.state.with_query(query);
        debug!(query, visible = self.state.visible().len(), "filter applied");
        self.render();
    }

    pub fn render(&mut self) {
        render(&mut self.presenter, self.state.visible(), &self.images);
    }

    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn state(&self) -> &BrowserState {
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
