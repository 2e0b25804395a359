pub mod a001_shopcart;
