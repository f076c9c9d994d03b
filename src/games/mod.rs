pub mod pennydrop;
