pub mod messages;
pub mod notice;
