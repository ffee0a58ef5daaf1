/// Ways a product fetch can fail.
///
/// The `Display` text is what ends up on the status line, after the `Error: ` prefix.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network, DNS, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code
    #[error("Failed to fetch products (HTTP {status})")]
    Http { status: u16 },

    /// The body was not a JSON array of products
    #[error("Failed to parse products: {0}")]
    Decode(String),
}
