pub mod export;
pub mod storage;
