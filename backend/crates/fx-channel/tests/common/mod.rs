#![allow(unused_imports)]

pub(crate) mod test_subscribers;

pub use test_subscribers::*;
