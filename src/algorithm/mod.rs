pub mod allpairs;
pub mod cluster;
pub mod common;
pub mod inspect;
