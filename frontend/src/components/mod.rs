pub mod helpers;
pub mod pages;
pub mod search_input;
pub mod test_list;
