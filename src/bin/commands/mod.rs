pub mod bench;
pub mod find_cmd;

pub use bench::cmd_bench;
pub use find_cmd::cmd_find;
