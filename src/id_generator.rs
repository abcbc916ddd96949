use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all drawables
static NEXT_DRAWABLE_ID: AtomicUsize = AtomicUsize::new(1);

/// Process-unique identity of a recorded drawable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(usize);

impl DrawableId {
    pub fn next() -> Self {
        Self(NEXT_DRAWABLE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
