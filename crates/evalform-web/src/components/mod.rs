pub mod confirmation;
pub mod header;
pub mod rating_section;
