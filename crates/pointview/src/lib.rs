#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pointview_linalg as linalg;

#[doc(inline)]
pub use pointview_viewer as viewer;
