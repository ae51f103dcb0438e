pub(crate) mod fields;
