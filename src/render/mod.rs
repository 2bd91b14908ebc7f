pub(crate) mod backend;
pub(crate) mod cover;
pub(crate) mod cpu;
