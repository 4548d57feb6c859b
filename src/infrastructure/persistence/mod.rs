mod pg_pool;
mod pg_user_repository;

pub use pg_pool::create_pool;
pub use pg_user_repository::PgUserRepository;
