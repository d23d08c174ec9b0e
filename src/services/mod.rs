pub mod reconciler;
pub mod remote_lister;

pub use reconciler::reconcile;
