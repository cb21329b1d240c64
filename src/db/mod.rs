mod pool;

pub use pool::{create_pool, init_schema};
