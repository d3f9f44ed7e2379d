//! Client side of the varseq pipeline.
//!
//! A submission goes through four stages:
//! - [`source`]: pasted text or a dropped file becomes a [`source::SequencePayload`]
//! - [`client`]: the payload is posted to the prediction service
//! - [`handoff`]: a successful answer is written to a session-scoped slot
//! - [`view`]: a results page reads the slot back and derives its tabs
//!
//! [`submit::Submitter`] drives the first three stages the way the upload
//! page does; [`view::ResultView`] is the results page.

pub mod client;
pub mod consts;
pub mod handoff;
pub mod notify;
pub mod source;
pub mod store;
pub mod submit;
pub mod transport;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
