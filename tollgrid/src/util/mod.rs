pub mod day_codec;
pub mod matrix_csv;
pub mod table_io;
