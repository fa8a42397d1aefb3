mod decode_bad;
pub mod utils;
