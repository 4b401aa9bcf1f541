pub mod contact;
pub mod vehicle;
