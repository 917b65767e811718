//! Server-rendered pages built with maud.

mod layout;
mod snippet;
mod user;

pub use layout::page;
pub use snippet::{create as create_snippet_page, home as home_page, show as show_snippet_page};
pub use user::{login as login_page, signup as signup_page};
