#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod test_home;

pub use test_home::TestHomeGuard;
