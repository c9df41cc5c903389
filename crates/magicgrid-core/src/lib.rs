pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod layout;
pub mod render;
pub mod session;
pub mod source;
