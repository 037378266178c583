use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Both text1 and text2 are required.")]
    MissingTexts,
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
