mod client;

pub use client::{
    OcrClient, OcrError, PARSE_ERROR_TEXT, PROCESSING_ERROR_TEXT, TRANSPORT_ERROR_TEXT,
};
