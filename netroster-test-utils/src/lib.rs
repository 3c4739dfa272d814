pub mod backend;
pub mod builder;
pub mod error;
pub mod fixtures;
pub mod storage;

pub use backend::{Method, MockBackend, RecordedRequest};
pub use builder::TestBuilder;
pub use error::TestError;
pub use storage::MemoryStorage;

pub mod prelude {
    pub use crate::{
        builder::server_error,
        fixtures::{account::*, org::*, user::*},
        MemoryStorage, Method, MockBackend, TestBuilder, TestError,
    };
}
