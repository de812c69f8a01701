use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::try_join;
use portal_model::{RecommendationSet, RecommendationSource};

use crate::view::{self, PageView, Tab};

/// The only failure message the recommendations page ever shows
pub const LOAD_ERROR: &str = "Failed to load recommendations";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// not mounted yet
    Idle,
    Loading,
    Ready(RecommendationSet),
    Failed(String),
}

/// Shared flag telling in-flight work whether its page is still on screen.
/// Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the recommendations page: one combined fetch per mount, then
/// derived views over whatever that fetch produced.
pub struct Presenter<S> {
    source: S,
    state: ViewState,
    tab: Tab,
    liveness: Liveness,
}

impl<S> Presenter<S>
where
    S: RecommendationSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewState::Idle,
            tab: Tab::default(),
            liveness: Liveness::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Handle for whoever tears the page down while a fetch is in flight
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn unmount(&self) {
        self.liveness.unmount();
    }

    /// Fetches matches and skill gaps concurrently and waits for both.
    ///
    /// Either request failing puts the page in the error state, nothing of
    /// the other one is shown. Results that arrive after `unmount` are
    /// dropped. Only the first call fetches, later calls return at once.
    pub async fn mount(&mut self) {
        if !matches!(self.state, ViewState::Idle) {
            log::debug!("recommendations already mounted, not fetching again");
            return;
        }
        if !self.liveness.is_alive() {
            log::debug!("recommendations unmounted before mount, not fetching");
            return;
        }
        self.state = ViewState::Loading;
        log::info!("loading recommendations");
        let fetched = try_join(self.source.fetch_matches(), self.source.fetch_skill_gaps()).await;
        if !self.liveness.is_alive() {
            log::debug!("recommendations unmounted while loading, dropping results");
            return;
        }
        self.state = match fetched {
            Ok((matches, skill_gaps)) => {
                log::info!(
                    "loaded {} matches and {} skill gaps",
                    matches.len(),
                    skill_gaps.len()
                );
                ViewState::Ready(RecommendationSet::new(matches, skill_gaps))
            }
            Err(e) => {
                log::error!("failed to load recommendations: {}", e);
                ViewState::Failed(LOAD_ERROR.to_owned())
            }
        };
    }

    /// Switching tabs never fetches
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn view(&self) -> PageView {
        match &self.state {
            ViewState::Idle | ViewState::Loading => PageView::Loading,
            ViewState::Failed(message) => PageView::Failed {
                message: message.clone(),
            },
            ViewState::Ready(set) => PageView::Ready {
                tabs: view::tab_labels(set, self.tab),
                body: view::tab_body(set, self.tab),
            },
        }
    }
}
