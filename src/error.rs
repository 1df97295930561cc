use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed rules file")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpeechError {
    #[error("speech classifier failed: {0}")]
    Classifier(String),
    #[error("malformed classification {line:?}")]
    Malformed { line: String },
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device")]
    NoDevice(#[from] rodio::StreamError),
    #[error("failed to read sound file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode sound file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
