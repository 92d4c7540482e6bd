pub mod a025_department;
