pub mod copyhashmap;
pub mod errorfmt;
