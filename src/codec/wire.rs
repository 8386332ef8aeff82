//! Wire Schema
//!
//! Protocol-buffer records exchanged with the engine. Encoding and decoding is
//! done by `prost`; enum-typed fields stay raw `i32` here and are resolved to
//! names through [`crate::codec::enums`].

/// A single finding as the engine encodes it
#[derive(Clone, PartialEq, prost::Message)]
pub struct WireValidationError {
    #[prost(int32, optional, tag = "1")]
    pub code: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub line: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub col: Option<i32>,
    #[prost(string, optional, tag = "5")]
    pub spec_url: Option<String>,
    #[prost(int32, optional, tag = "6")]
    pub severity: Option<i32>,
    #[prost(string, repeated, tag = "7")]
    pub params: Vec<String>,
    #[prost(string, optional, tag = "8")]
    pub data_amp_report_test_value: Option<String>,
}

/// A complete validation outcome as the engine encodes it
#[derive(Clone, PartialEq, prost::Message)]
pub struct WireValidationResult {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(message, repeated, tag = "2")]
    pub errors: Vec<WireValidationError>,
    #[prost(string, repeated, tag = "4")]
    pub type_identifier: Vec<String>,
    #[prost(string, optional, tag = "6")]
    pub validator_revision: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub spec_file_revision: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub transformer_version: Option<String>,
}
