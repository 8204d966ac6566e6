mod json_schema;

pub use json_schema::ListResult;
