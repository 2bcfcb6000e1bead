mod file_ops;

pub use file_ops::{ensure_dir, list_regular_files, move_into_dir, rename_dir};
