pub mod booking;
pub mod service;

pub use booking::{BookingDraft, BookingFields, BookingRecord, Record};
pub use service::Service;
