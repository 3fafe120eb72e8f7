pub mod get_file;
pub mod get_files_from_folder;
