//! UI Components
//!
//! Leptos projections of the board tree. They hold no state of their own;
//! every interaction is dispatched into the session.

mod board_column;
mod container_creator;
mod item_card;
mod paired_form;

pub use board_column::BoardColumn;
pub use container_creator::ContainerCreator;
pub use item_card::ItemCard;
pub use paired_form::PairedForm;
