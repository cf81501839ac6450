pub mod error;
pub mod model;
pub mod requests;
pub mod responses;
pub mod session;
