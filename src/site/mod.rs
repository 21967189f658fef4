pub(crate) mod assets;
pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod layouts;
pub(crate) mod markdown;
