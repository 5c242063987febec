/// Chain height supplied by the caller; only ever compared and subtracted
pub type BlockHeight = u64;
