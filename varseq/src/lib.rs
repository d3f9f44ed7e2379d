#[cfg(feature = "core")]
#[doc(inline)]
pub use varseq_core as core;

#[cfg(feature = "client")]
#[doc(inline)]
pub use varseq_client as client;
