pub(crate) mod extent;
pub(crate) mod frame_index;
pub(crate) mod mapper;
pub(crate) mod spring;
