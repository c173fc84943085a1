pub mod doctors;
pub mod specialist;

pub use doctors::{Doctor, DoctorRoster};
pub use specialist::predict_specialist;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
