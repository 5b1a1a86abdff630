use pedagogy_core::{CatalogState, Favorites, ModalMachine, SaveAck, Strategy, Ticket, View};
use std::rc::Rc;
use yew::prelude::*;

pub enum CatalogAction {
    Loaded(Vec<Strategy>),
    Favorites(Favorites),
    Search(String),
    Phase(String),
    View(View),
}

/// Catalog, favorites and filter inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogModel(pub CatalogState);

impl Reducible for CatalogModel {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            CatalogAction::Loaded(strategies) => {
                if !next.set_strategies(strategies) {
                    return self;
                }
            }
            CatalogAction::Favorites(favorites) => next.favorites = favorites,
            CatalogAction::Search(term) => next.set_search_term(term),
            CatalogAction::Phase(value) => next.set_phase_filter(&value),
            CatalogAction::View(view) => next.set_view(view),
        }
        Rc::new(Self(next))
    }
}

pub enum ModalAction {
    Open { strategy: Strategy, note: String },
    Settle(Ticket),
    Close,
    FinishClose(Ticket),
    EditNote(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalModel(pub ModalMachine);

impl Reducible for ModalModel {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        let changed = match action {
            ModalAction::Open { strategy, note } => {
                next.open(strategy, note);
                true
            }
            ModalAction::Settle(ticket) => next.settle(ticket),
            ModalAction::Close => next.close().is_some(),
            ModalAction::FinishClose(ticket) => next.finish_close(ticket),
            ModalAction::EditNote(text) => next.edit_note(text).is_some(),
        };
        if changed { Rc::new(Self(next)) } else { self }
    }
}

pub enum AckAction {
    Show,
    Expire(u64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AckModel(pub SaveAck);

impl Reducible for AckModel {
    type Action = AckAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            AckAction::Show => {
                next.show();
            }
            AckAction::Expire(ticket) => {
                if !next.expire(ticket) {
                    return self;
                }
            }
        }
        Rc::new(Self(next))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseReducerHandle<CatalogModel>,
    pub modal: UseReducerHandle<ModalModel>,
    pub ack: UseReducerHandle<AckModel>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_reducer(CatalogModel::default),
        modal: use_reducer(ModalModel::default),
        ack: use_reducer(AckModel::default),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.catalog.0.is_loaded()
    }
}
