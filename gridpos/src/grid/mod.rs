//! Alphanumeric grid references: Maidenhead locators and MGRS.

pub mod maidenhead;
pub mod mgrs;

pub use maidenhead::is_valid_maidenhead;
pub use mgrs::Mgrs;
