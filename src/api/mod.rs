//! HTTP layer: envelopes, field filters, handlers and routes.
//!
//! Every response is a [`envelope::GenericApiResponse`] encoded by
//! [`serializer::render`] with the endpoint's [`filter::FieldFilter`], and is
//! always sent as `200 OK`.
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes
//! - [`envelope`] - Response envelope and outcome codes
//! - [`extractors`] - Custom request extractors
//! - [`filter`] - Named field allow-lists
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration
//! - [`serializer`] - Filtered encoding with fallback

pub mod dto;
pub mod envelope;
pub mod extractors;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod serializer;
