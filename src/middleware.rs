pub mod client_ip;
pub mod cors;
pub mod i18n;
