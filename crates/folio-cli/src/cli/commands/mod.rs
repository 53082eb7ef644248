//! CLI command handlers, one file per command.

mod contact;
mod contact_info;
mod fetch;
mod home;
mod icon;
mod news;
mod resolve;
mod roles;

pub use contact::run_contact;
pub use contact_info::run_contact_info;
pub use fetch::run_fetch;
pub use home::run_home;
pub use icon::run_icon;
pub use news::run_news;
pub use resolve::run_resolve;
pub use roles::run_roles;
