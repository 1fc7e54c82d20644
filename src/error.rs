use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("singular response: denominator vanishes at s = {0}")]
    SingularResponse(Complex64),

    #[error("magnitude is zero; dB conversion is undefined")]
    NonPositiveMagnitude,

    #[error("degenerate filter: leading denominator coefficient is zero")]
    DegenerateFilter,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
