pub mod csv;
pub mod workdir;
