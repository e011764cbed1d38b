pub mod page_size;
pub mod table_view;
pub mod window;
