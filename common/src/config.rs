#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Skips the banner printed on startup.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` drops section headers, `2` drops every decoration except tables
    /// and totals.
    pub quiet: u8,
    /// Answers every order confirmation with `y` instead of asking the operator.
    pub assume_yes: bool
}
