pub mod wrapped;
