pub mod customize;
