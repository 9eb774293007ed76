pub mod deck_list;
pub mod payload;
