//! CLI command handlers. Each command is in its own file.

mod add;
mod check;
mod docs;
mod edit;
mod list;
mod remove;
mod theme;

pub use add::run_add;
pub use check::run_check;
pub use docs::run_docs;
pub use edit::run_edit;
pub use list::run_list;
pub use remove::run_remove;
pub use theme::run_theme;
