pub mod pages;
pub mod probes;
