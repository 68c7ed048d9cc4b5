use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread,
};

use tracing::debug;

use crate::{
    model::{champion::ChampionCollection, ids::LanguageCode, item::ItemCollection},
    service::api::{ChampionSource, ItemSource, LoadError},
};

/// Identifies one load request. Later requests carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct LoadOutcome<T> {
    pub ticket: LoadTicket,
    pub language: Option<LanguageCode>,
    pub result: Result<T, LoadError>,
}

type Fetch<T> = dyn Fn(Option<&LanguageCode>) -> Result<T, LoadError> + Send + Sync;

/// Runs each fetch on its own thread and collects the outcomes on one channel.
pub struct Loader<T> {
    kind: &'static str,
    fetch: Arc<Fetch<T>>,
    tx: Sender<LoadOutcome<T>>,
    rx: Receiver<LoadOutcome<T>>,
    issued: u64,
}

impl Loader<ChampionCollection> {
    pub fn new(source: Arc<dyn ChampionSource>) -> Self {
        Self::with_fetch("champions", move |language| source.fetch(language))
    }
}

impl Loader<ItemCollection> {
    pub fn items(source: Arc<dyn ItemSource>) -> Self {
        Self::with_fetch("items", move |language| source.fetch_items(language))
    }
}

impl<T: Send + 'static> Loader<T> {
    fn with_fetch<F>(kind: &'static str, fetch: F) -> Self
    where
        F: Fn(Option<&LanguageCode>) -> Result<T, LoadError> + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel();
        Self {
            kind,
            fetch: Arc::new(fetch),
            tx,
            rx,
            issued: 0,
        }
    }

    /// A panicking fetch still reports an outcome, so the ticket never stays outstanding.
    pub fn load(&mut self, language: Option<LanguageCode>) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        let fetch = Arc::clone(&self.fetch);
        let tx = self.tx.clone();

        debug!(%ticket, language = ?language, "spawning {} load", self.kind);
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| (*fetch)(language.as_ref())))
                .unwrap_or_else(|payload| Err(LoadError::WorkerPanicked(panic_message(&*payload))));
            tx.send(LoadOutcome {
                ticket,
                language,
                result,
            })
            .ok();
        });

        ticket
    }

    pub fn latest(&self) -> Option<LoadTicket> {
        (self.issued > 0).then_some(LoadTicket(self.issued))
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        self.latest() == Some(ticket)
    }

    /// Outcomes that arrived since the last call, in completion order.
    pub fn completed(&self) -> Vec<LoadOutcome<T>> {
        self.rx.try_iter().collect()
    }

    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<LoadOutcome<T>> {
        self.rx.recv_timeout(timeout).ok()
    }
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<no message>".to_string()
    }
}
