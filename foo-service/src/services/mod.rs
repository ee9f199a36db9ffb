pub mod foo;
pub mod metrics;
pub mod repository;

pub use foo::FooService;
pub use self::metrics::{get_metrics, init_metrics};
pub use repository::{FooRepository, FooStream, InMemoryFooRepository, MongoFooRepository};
