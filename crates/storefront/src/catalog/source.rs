use log::{debug, warn};
use storefront_core::catalog::{FetchError, Product};

pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Where the catalog comes from.
///
/// A source is asked exactly once per page load and either yields the full
/// product list or fails.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Fetches the product list with a single HTTP GET
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductSource for HttpSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {e}", self.endpoint);
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!("{} answered {status}", self.endpoint);

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/products")
    }

    #[tokio::test]
    async fn test_fetch_products_success() {
        let router = Router::new().route(
            "/products",
            get(|| async {
                Json(serde_json::json!([
                    {
                        "id": 1,
                        "title": "Red Shirt",
                        "price": 20,
                        "category": "clothing",
                        "image": "https://example.com/1.png",
                        "rating": { "rate": 4.1, "count": 259 }
                    },
                    {
                        "id": 2,
                        "title": "Red Mug",
                        "price": 5.5,
                        "category": "home",
                        "image": "https://example.com/2.png"
                    }
                ]))
            }),
        );
        let source = HttpSource::new(serve(router).await);

        let products = source.fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Red Shirt");
        assert_eq!(products[1].price, 5.5);
    }

    #[tokio::test]
    async fn test_fetch_products_empty_array() {
        let router = Router::new().route("/products", get(|| async { Json(serde_json::json!([])) }));
        let source = HttpSource::new(serve(router).await);

        assert_eq!(source.fetch_products().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_fetch_products_http_failure() {
        let router = Router::new().route(
            "/products",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let source = HttpSource::new(serve(router).await);

        assert_eq!(
            source.fetch_products().await,
            Err(FetchError::Http { status: 503 })
        );
    }

    #[tokio::test]
    async fn test_fetch_products_not_found_route() {
        let router = Router::new();
        let source = HttpSource::new(serve(router).await);

        assert_eq!(
            source.fetch_products().await,
            Err(FetchError::Http { status: 404 })
        );
    }

    #[tokio::test]
    async fn test_fetch_products_decode_failure() {
        let router = Router::new().route("/products", get(|| async { "not json" }));
        let source = HttpSource::new(serve(router).await);

        assert!(matches!(
            source.fetch_products().await,
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_products_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpSource::new(format!("http://{addr}/products"));

        assert!(matches!(
            source.fetch_products().await,
            Err(FetchError::Transport(_))
        ));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpSource::new(DEFAULT_ENDPOINT).endpoint(), DEFAULT_ENDPOINT);
    }
}
