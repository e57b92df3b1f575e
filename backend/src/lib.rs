//! Grievance portal backend domain core.
//!
//! This crate owns the decision logic of the municipal grievance portal's
//! account lifecycle: whether a newly registered user may be admitted and
//! under which organisational attachment, and which part of the portal an
//! authenticated identity is authorised to reach.
//!
//! Inbound HTTP handlers and outbound persistence adapters live outside
//! this crate. They interact with the domain through the ports in
//! [`domain::ports`] and the pure functions in [`domain::routing`] and
//! [`domain::access`].

pub mod domain;
