pub mod use_page;
