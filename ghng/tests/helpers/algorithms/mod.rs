pub mod gng;
