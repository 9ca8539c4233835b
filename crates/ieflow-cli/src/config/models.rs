use ieflow::engine::config::DriverConfig;

/// Everything `drive` needs after all configuration layers are merged.
pub struct DriveAppConfig {
    pub driver: DriverConfig,
    pub dry_run: bool,
    pub strict: bool,
}
