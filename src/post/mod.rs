//! Feed post data model and the caller-side resident window.

pub(crate) mod model;
pub(crate) mod window;
