pub mod connection_test;
