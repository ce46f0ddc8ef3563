pub mod d100_department_data;
