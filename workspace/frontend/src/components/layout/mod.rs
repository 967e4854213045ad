pub mod layout;
mod navbar;
