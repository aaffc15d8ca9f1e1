pub mod json_write;
pub mod workbook_read;
