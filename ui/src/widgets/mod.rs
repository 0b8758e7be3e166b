mod control_panel;
mod export;
mod preview;

pub use control_panel::control_panel;
pub use export::export_actions;
pub use preview::preview;
