//! Pure text-to-category classifiers and the location resolver. Each
//! classifier evaluates an ordered pattern list and returns the first match,
//! or empty when nothing is recognized.

pub mod deadline;
pub mod education;
pub mod employment;
pub mod experience;
pub mod location;
pub mod salary;

pub use deadline::format_deadline;
pub use education::clean_education;
pub use employment::clean_employment_type;
pub use experience::clean_experience;
pub use location::{extract_location_from_text, format_location};
pub use salary::clean_salary;
