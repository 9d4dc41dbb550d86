pub mod db_pool;
pub mod logging;
pub mod settlement_tasks;
pub mod shutdown;
