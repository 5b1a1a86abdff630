pub mod card_grid;
pub mod strategy_modal;

pub use card_grid::{CardGrid, StrategyCard};
pub use strategy_modal::StrategyModal;
