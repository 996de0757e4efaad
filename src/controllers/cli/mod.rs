pub mod render_to_file;
