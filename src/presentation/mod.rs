// src/presentation/mod.rs

mod detail;
mod list;
mod settings;

pub use detail::DetailPresenter;
pub use list::ListPresenter;
pub use settings::SettingsModel;
