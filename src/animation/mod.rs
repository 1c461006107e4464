pub(crate) mod lerp;
