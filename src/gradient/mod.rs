pub(crate) mod sampler;
pub(crate) mod stops;
