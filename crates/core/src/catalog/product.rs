use serde::{Deserialize, Serialize};

/// Product identifier as returned by the API (numeric or textual)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{id}"),
            ProductId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// Aggregated customer rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Product record from the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// The full product list for a session.
///
/// Built once from a successful fetch and read-only afterwards. Every
/// filtered view is derived into a new sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub const EMPTY: Catalog = Catalog {
        products: Vec::new(),
    };

    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
