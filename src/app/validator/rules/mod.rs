pub mod email;
pub mod required;
pub mod str_min_chars_count;
