use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Hand must contain at least one roll")]
    EmptyHand,
    #[error("Invalid face value: {face} (faces start at 1)")]
    InvalidFace { face: u32 },
    #[error("Cannot parse face value: {0:?}")]
    UnparsableFace(String),
    #[error("Face value {face} is out of range for a {faces}-sided die")]
    FaceOutOfRange { face: u32, faces: u32 },
    #[error("Hand has {actual} dice, at most {max} are supported")]
    TooManyDice { actual: usize, max: usize },
    #[error("Expected {expected} dice, got {actual}")]
    WrongDieCount { expected: usize, actual: usize },
    #[error("There is no result for roll {index}, hand only contains {len} rolls")]
    RollIndexOutOfRange { index: usize, len: usize },
    #[error("Unknown score category: {0}")]
    UnknownCategory(String),
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}
