pub(crate) mod beats;
