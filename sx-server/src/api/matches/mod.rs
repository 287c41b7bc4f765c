pub mod match_list_response;
#[allow(clippy::module_inception)]
pub mod matches;
