//! Навигационный shell: корневой стек, tab host и единый store состояния.

pub mod navigator;
pub mod runtime;
pub mod store;
pub mod tabs;

pub use navigator::RootNavigator;
pub use runtime::ShellRuntime;
pub use store::{ShellEvent, ShellStore, ShellView};
pub use tabs::{TabHost, TabKey};
