pub(crate) mod rect;
