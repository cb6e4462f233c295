//! Handler implementations
//!
//! Handlers compose by wrapping. The usual chain for a sink is
//! `LazyHandler(SyncHandler(WriterHandler))`, built by [`stream_handler`].

#[cfg(feature = "file")]
pub mod file;
pub mod filter;
pub mod func;
pub mod lazy;
pub mod multi;
pub mod swap;
pub mod sync;
pub mod writer;

#[cfg(feature = "file")]
pub use file::file_handler;
pub use filter::{
    caller_handler, filter_handler, level_filter_handler, CallerHandler, FilterHandler, CALLER_KEY,
};
pub use func::{discard_handler, func_handler, DiscardHandler, FuncHandler};
pub use lazy::{lazy_handler, resolve_lazy_values, LazyHandler, BAD_LAZY};
pub use multi::{multi_handler, MultiHandler};
pub use swap::SwapHandler;
pub use sync::{sync_handler, SyncHandler};
pub use writer::{stream, stream_handler, StreamHandler, WriterHandler};

// Re-export the trait alongside its implementations
pub use crate::core::{Handler, HandlerRef};
