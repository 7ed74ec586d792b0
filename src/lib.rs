pub mod authz;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod navigation;
pub mod server;
pub mod session;
pub mod state;

pub mod cli;
