pub mod category;
pub mod media_type;
pub mod result;

pub use category::Category;
pub use media_type::MediaType;
pub use result::ParsedResult;
