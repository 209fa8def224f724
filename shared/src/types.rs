/// Result alias used at the application and presentation boundary.
pub type Result<T> = anyhow::Result<T>;
