//! Request-envelope machinery.
//!
//! Every API call travels as a head+body envelope. The head identifies the
//! app and the operation (request code); the body carries the operation's
//! fields. [`endpoints`] is the read-only table of routes and request
//! codes, [`body`] holds the per-family templates, and [`builder`]
//! assembles one immutable envelope per call.

pub(crate) mod body;
pub(crate) mod builder;
pub(crate) mod endpoints;

pub(crate) use body::{Envelope, ResponseEnvelope};
pub(crate) use builder::EnvelopeBuilder;
pub(crate) use endpoints::Endpoint;
