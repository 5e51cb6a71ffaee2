//! Multi-tenant authentication gateway library.
//!
//! The crate is laid out hexagonally: [`domain`] owns value objects, use-case
//! services and the ports they depend on; [`inbound`] adapts HTTP requests onto
//! the driving ports; [`outbound`] implements the driven ports against the
//! identity provider, the tenancy admin API and the provisioning tooling.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
