pub mod captcha;
pub mod contact_service;
pub mod notifier;
pub mod vehicle_service;

pub use captcha::{CaptchaVerifier, TokenPresenceCaptcha};
pub use contact_service::ContactService;
pub use notifier::{LogNotifier, Notifier};
pub use vehicle_service::VehicleService;
