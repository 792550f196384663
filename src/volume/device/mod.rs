pub mod device_struct;
pub mod device_methods;
