pub mod composite;
pub mod cpu;
