/// `RegistryConfig` contains the config used to initialize a `Registry`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct RegistryConfig {
    /// Number of entries the backing storage is pre-sized for
    pub initial_capacity: usize,
}

impl RegistryConfig {
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    fn default_initial_capacity() -> usize {
        0
    }
}

impl Default for RegistryConfig {
    /// Creates a `RegistryConfig` that doesn't pre-allocate
    fn default() -> Self {
        Self {
            initial_capacity: RegistryConfig::default_initial_capacity(),
        }
    }
}

impl From<usize> for RegistryConfig {
    fn from(initial_capacity: usize) -> Self {
        Self::new(initial_capacity)
    }
}

#[cfg(test)]
mod tests {
    use crate::RegistryConfig;

    #[test]
    fn config_from() {
        assert_eq!(RegistryConfig::default().initial_capacity, 0);
        assert_eq!(RegistryConfig::from(64), RegistryConfig::new(64));
    }
}
