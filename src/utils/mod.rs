mod errors;

pub use errors::Error;

pub type StreamliteResult<T> = Result<T, Error>;
