pub(crate) mod gradient;
pub(crate) mod hex;
pub(crate) mod scheme;
