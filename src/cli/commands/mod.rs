pub mod check;
pub mod nav;
pub mod serve;
pub mod token;
