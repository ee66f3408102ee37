//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod results_component;
pub mod search_bar;
pub mod status_bar;
pub mod tab_bar;
pub mod welcome_curtain;

// Component exports
pub use dialog_component::DialogComponent;
pub use results_component::ResultsComponent;
pub use search_bar::SearchBarComponent;
pub use status_bar::StatusBarComponent;
pub use tab_bar::TabBarComponent;
pub use welcome_curtain::WelcomeCurtainComponent;
