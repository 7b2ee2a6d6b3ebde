//! msgbind-core - Rust declarations from RPC field trees
//!
//! This crate turns a loaded description of an RPC service into Rust source:
//! - [`Generator`] renders one field (and everything below it) as text
//! - [`Emitter`] adds the per-method glue and the `Request`/`Response` unions
//! - [`Sink`] receives the ordered output
//!
//! # Example
//!
//! ```
//! use msgbind_core::prelude::*;
//!
//! let service = Service {
//!     methods: vec![Method::new(
//!         "getinfo",
//!         Field::composite("getinfo", "GetinfoRequest", vec![]),
//!         Field::composite("getinfo", "GetinfoResponse", vec![
//!             Field::primitive("blockheight", "u32"),
//!         ]),
//!     )],
//! };
//!
//! let config = GeneratorConfig::default();
//! let mut sink = StringSink::new(config.indent.clone());
//! generate(&service, &Meta::default(), &config, &mut sink).unwrap();
//!
//! assert!(sink.as_str().contains("pub struct GetinfoResponse {"));
//! ```

pub mod config;
pub mod emitter;
pub mod enums;
mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod sink;
pub mod typemap;

pub use config::GeneratorConfig;
pub use emitter::{Emitter, generate};
pub use error::{GenError, GenResult};
pub use generator::{Fragments, Generator};
pub use model::{Field, FieldKind, Meta, Method, Override, Service, Variant};
pub use sink::{Sink, StringSink, WriterSink};
pub use typemap::TypeMap;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Emitter, Field, FieldKind, GenError, GenResult, Generator, GeneratorConfig, Meta, Method,
        Override, Service, Sink, StringSink, Variant, WriterSink, generate,
    };
}
