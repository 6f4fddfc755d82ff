//! HTML adapter tests

mod normalize;
