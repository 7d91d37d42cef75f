pub mod cli;
pub mod client;
pub mod ctx;
pub mod flags;
pub mod form;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod session;
pub mod survival;
pub mod treatment;
