pub mod a001_department;
pub mod d100_department_data;
