//! Converter core: API descriptions → Claude Code skills.
//!
//! This crate normalizes three heterogeneous source formats (MCP server
//! manifests, ad-hoc REST API configs, OpenAPI specifications) into one
//! canonical intermediate schema and deterministically generates skill
//! metadata, instruction text, and overflow documentation files from it.
//!
//! # Architecture
//!
//! - [`ApiSchema`]: the format-agnostic intermediate representation
//! - [`SkillConverter`]: the capability contract, a required `parse` plus
//!   generation methods with shared default implementations
//! - [`RestConverter`], [`OpenApiConverter`], [`McpConverter`]: the three
//!   stateless variants
//! - [`dispatch`]: the request-level boundary that never lets an error
//!   escape as a raised failure
//!
//! # Determinism
//!
//! Every conversion is a pure, synchronous function of its input: repeated
//! conversions of the same source yield byte-identical documents. JSON
//! object iteration preserves declaration order (`serde_json` with
//! `preserve_order`), so operation order survives end-to-end.
//!
//! # Examples
//!
//! ```
//! use skillsmith_convert::{dispatch, ConvertRequest, SourceInput};
//! use skillsmith_core::SourceType;
//!
//! let request = ConvertRequest {
//!     source_type: SourceType::RestApi,
//!     source: SourceInput::Text(
//!         r#"{"baseUrl": "https://api.example.com", "endpoints": []}"#.to_string(),
//!     ),
//!     options: None,
//! };
//!
//! let response = dispatch(&request);
//! assert!(response.success);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod convert;
mod mcp;
mod openapi;
mod rest;
mod schema;

pub use convert::{
    ConvertOptions, ConvertRequest, ConvertResponse, MAX_INLINE_OPERATIONS, SkillConverter,
    converter_for, dispatch,
};
pub use mcp::McpConverter;
pub use openapi::OpenApiConverter;
pub use rest::RestConverter;
pub use schema::{
    ApiSchema, AuthConfig, AuthScheme, McpLaunch, Operation, Parameter, ParameterLocation,
    SourceInput,
};
