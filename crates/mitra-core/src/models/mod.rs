pub mod alert;
pub mod cardio;
pub mod classification;
pub mod parameter;
pub mod patient;
pub mod report;
pub mod vitals;
