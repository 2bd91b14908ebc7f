pub(crate) mod decode;
pub(crate) mod frames;
pub(crate) mod loader;
pub(crate) mod naming;
pub(crate) mod source;
