pub mod reconciler;

pub use reconciler::CallbackService;
