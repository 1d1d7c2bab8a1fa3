pub mod coin;
pub mod status;
