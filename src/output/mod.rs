mod json;
mod source;

pub(crate) use json::output_stubs_json;
pub(crate) use source::render_suite;
