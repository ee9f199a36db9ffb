pub mod foo;

pub use foo::{BarData, FooData, FooDocument, FOO_COLLECTION};
