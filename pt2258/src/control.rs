/// Trait for components whose output level can be adjusted at runtime.
///
/// Lets application code (encoders, menus, remote control handlers) drive a
/// volume stage without knowing which chip sits behind it.
pub trait VolumeControl {
    /// Error type for control operations.
    type Error;

    /// Set the output level (0 = silent, 100 = full scale).
    fn set_volume(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Mute or unmute the output without changing the stored level.
    fn set_muted(&mut self, muted: bool) -> Result<(), Self::Error>;
}
