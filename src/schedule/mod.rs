pub(crate) mod clock;
pub(crate) mod tick;
pub(crate) mod token;
