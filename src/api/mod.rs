pub mod catalog;
pub mod cors;
pub mod search;
pub mod security;
pub mod server;
