pub mod errors;
pub mod fixture;
pub mod store;

pub use errors::MockError;
pub use fixture::read_obj_from_file;
pub use store::{get_async_mock, get_path, get_views_mock, resolve_mock, write_mock_back, ResolvedMock};
