pub mod middleware;
pub mod router;
