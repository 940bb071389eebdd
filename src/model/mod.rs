pub mod cwr;
