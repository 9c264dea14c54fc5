pub mod assets {
    use parcel_runtime::registry;

    pub fn init() -> Result<(), registry::RegistryError> {
        registry::add_resource("hello", &[72, 105])
    }
}
