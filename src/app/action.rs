#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a map deep link in the platform's default handler
    OpenMap { url: String },
    /// Force a re-read of the snapshot file
    Reload,
    Quit,
}
