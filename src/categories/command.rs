pub mod add_category_cmd;
pub mod count_categories_cmd;
pub mod remove_category_cmd;
