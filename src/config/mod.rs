pub(crate) mod hero;
