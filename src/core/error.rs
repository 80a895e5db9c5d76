use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("generation exhausted all {attempts} attempts without a valid track")]
    GenerationExhausted { attempts: u32 },

    #[error("invalid generation options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
