pub mod common;
pub mod email_summary;
pub mod skincare_analysis;
