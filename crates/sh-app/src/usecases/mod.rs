mod build_data_control_package;

pub use build_data_control_package::DataControlPackageFactory;
