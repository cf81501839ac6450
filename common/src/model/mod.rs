pub mod link;
pub mod phone;
pub mod record;
pub mod report;
pub mod screen;
