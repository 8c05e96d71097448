pub mod nav;
pub mod setup;
