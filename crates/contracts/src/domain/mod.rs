pub mod a001_shopcart;
pub mod common;
