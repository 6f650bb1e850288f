//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with storage-assigned ids
//! - Single-column equality finders (name, category, availability, price)
//!
//! Every query here is one equality predicate handed to SQLite; there is no
//! search ranking, paging, or joins.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shelf_core::{Category, DataValidationError, Price, Product};

const SELECT_PRODUCT: &str =
    "SELECT id, name, description, price_cents, available, category FROM products";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let mut product = Product { /* ... */ };
/// repo.create(&mut product).await?;      // assigns product.id
///
/// let found = repo.find(product.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inserts a new row for the product's current state.
    ///
    /// The storage layer assigns the identifier, which is reflected back
    /// into `product.id`. Any previously held id is ignored; creating always
    /// produces a new row.
    pub async fn create(&self, product: &mut Product) -> DbResult<()> {
        debug!(product = %product, "Creating product");

        let result = sqlx::query(
            "INSERT INTO products (name, description, price_cents, available, category) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        product.id = Some(result.last_insert_rowid());

        debug!(id = product.id, "Product created");
        Ok(())
    }

    /// Persists the product's current field values to its existing row.
    ///
    /// Requires a storage-assigned id: updating a product that was never
    /// created fails with the data-validation error rather than silently
    /// inserting. The id itself never changes.
    ///
    /// ## Errors
    /// * `DbError::Validation` - `product.id` is None
    /// * `DbError::NotFound` - the row no longer exists
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = product.id.ok_or(DataValidationError::MissingId)?;

        debug!(id, "Updating product");

        let result = sqlx::query(
            "UPDATE products SET \
                name = ?2, \
                description = ?3, \
                price_cents = ?4, \
                available = ?5, \
                category = ?6 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes the row matching the product's id.
    ///
    /// Deletion is idempotent: a product that was never created, or whose
    /// row is already gone, is a no-op. The in-memory value keeps its id but
    /// is stale afterwards.
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let Some(id) = product.id else {
            debug!("Delete on unsaved product is a no-op");
            return Ok(());
        };

        debug!(id, "Deleting product");

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // =========================================================================
    // Finders
    // =========================================================================

    /// Returns every product, unfiltered, in insertion order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Finds a product by primary key.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Returns all products with an exact name match.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name, "Finding products by name");

        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE name = ?1"))
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Returns all products in the given category.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let products =
            sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE category = ?1"))
                .bind(category)
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    /// Returns all products with the given availability.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available, "Finding products by availability");

        let products =
            sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE available = ?1"))
                .bind(available)
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    /// Returns all products with an exactly equal price.
    ///
    /// Equality is on the fixed-point value, so `12.50` only matches rows
    /// stored as `12.50`.
    pub async fn find_by_price(&self, price: Price) -> DbResult<Vec<Product>> {
        debug!(price = %price, "Finding products by price");

        let products =
            sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE price_cents = ?1"))
                .bind(price)
                .fetch_all(&self.pool)
                .await?;

        Ok(products)
    }

    /// Like [`find_by_price`](Self::find_by_price), but accepts a raw string
    /// as it arrives from a request query.
    ///
    /// A quoted and/or whitespace-padded numeric string (`"12.22"`,
    /// `' "12.22" '`) is normalized into a price before comparison; a string
    /// that does not parse fails with the data-validation error. The return
    /// value is always the result set, never a bare price.
    pub async fn find_by_price_str(&self, raw: &str) -> DbResult<Vec<Product>> {
        let price = Price::parse(raw)?;
        self.find_by_price(price).await
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Once;

    use serde_json::json;

    use super::*;
    use crate::pool::{Database, DbConfig};

    /// Quiet-by-default test logging; set RUST_LOG to see query traces.
    fn init_test_logging() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });
    }

    /// Fresh isolated database per test.
    async fn setup() -> Database {
        init_test_logging();
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    // Deterministic stand-in for a fuzzing product factory: names, prices
    // and categories cycle so that batches contain repeats.
    const NAMES: &[&str] = &["Hat", "Big Mac", "Sheets"];
    const PRICES: &[i64] = &[999, 1250, 1999, 50];
    const CATEGORIES: &[Category] = &[
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Electronics,
        Category::Automotive,
        Category::Tools,
        Category::Unknown,
    ];

    fn make_product(i: usize) -> Product {
        Product {
            id: None,
            name: NAMES[i % NAMES.len()].to_string(),
            description: Some(format!("factory product {i}")),
            price: Price::from_cents(PRICES[i % PRICES.len()]),
            available: i % 2 == 0,
            category: CATEGORIES[i % CATEGORIES.len()],
        }
    }

    async fn create_batch(repo: &ProductRepository, count: usize) -> Vec<Product> {
        let mut products = Vec::with_capacity(count);
        for i in 0..count {
            let mut product = make_product(i);
            repo.create(&mut product).await.unwrap();
            products.push(product);
        }
        products
    }

    #[tokio::test]
    async fn test_create_a_product() {
        let db = setup().await;
        let repo = db.products();

        assert!(repo.all().await.unwrap().is_empty());

        let mut product = make_product(0);
        repo.create(&mut product).await.unwrap();
        assert!(product.id.is_some());

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);

        // Check that it matches the original product
        let new_product = &products[0];
        assert_eq!(new_product.name, product.name);
        assert_eq!(new_product.description, product.description);
        assert_eq!(new_product.price, product.price);
        assert_eq!(new_product.available, product.available);
        assert_eq!(new_product.category, product.category);
    }

    #[tokio::test]
    async fn test_read_a_product() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(3);
        repo.create(&mut product).await.unwrap();
        let id = product.id.unwrap();

        let retrieved = repo.find(id).await.unwrap().unwrap();
        assert_eq!(retrieved.id, product.id);
        assert_eq!(retrieved.name, product.name);
        assert_eq!(retrieved.description, product.description);
        assert_eq!(retrieved.price, product.price);
    }

    #[tokio::test]
    async fn test_find_missing_product_returns_none() {
        let db = setup().await;
        let repo = db.products();

        assert!(repo.find(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_a_product() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(0);
        repo.create(&mut product).await.unwrap();
        let original_id = product.id;

        product.description = Some("test desc".to_string());
        repo.update(&product).await.unwrap();
        assert_eq!(product.id, original_id);

        // The id is unchanged and the mutation was persisted.
        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, original_id);
        assert_eq!(products[0].description.as_deref(), Some("test desc"));
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(0);
        repo.create(&mut product).await.unwrap();

        product.description = Some("test desc".to_string());
        product.id = None;
        let err = repo.update(&product).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(DataValidationError::MissingId)
        ));
        assert_eq!(err.to_string(), "Update called with empty ID field");
    }

    #[tokio::test]
    async fn test_update_vanished_row_is_not_found() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(0);
        repo.create(&mut product).await.unwrap();
        repo.delete(&product).await.unwrap();

        let err = repo.update(&product).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_a_product() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(0);
        repo.create(&mut product).await.unwrap();
        assert_eq!(repo.all().await.unwrap().len(), 1);

        repo.delete(&product).await.unwrap();
        assert_eq!(repo.all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = setup().await;
        let repo = db.products();

        // Never created: no-op.
        let unsaved = make_product(0);
        repo.delete(&unsaved).await.unwrap();

        // Already gone: also a no-op.
        let mut product = make_product(1);
        repo.create(&mut product).await.unwrap();
        repo.delete(&product).await.unwrap();
        repo.delete(&product).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_products() {
        let db = setup().await;
        let repo = db.products();

        assert!(repo.all().await.unwrap().is_empty());

        create_batch(&repo, 10).await;

        let products = repo.all().await.unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(repo.count().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_find_product_by_name() {
        let db = setup().await;
        let repo = db.products();

        let products = create_batch(&repo, 5).await;
        let name = products[0].name.clone();
        let count = products.iter().filter(|p| p.name == name).count();

        let found = repo.find_by_name(&name).await.unwrap();
        assert_eq!(found.len(), count);
        for product in found {
            assert_eq!(product.name, name);
        }
    }

    #[tokio::test]
    async fn test_find_by_availability() {
        let db = setup().await;
        let repo = db.products();

        let products = create_batch(&repo, 10).await;
        let available = products[0].available;
        let count = products.iter().filter(|p| p.available == available).count();

        let found = repo.find_by_availability(available).await.unwrap();
        assert_eq!(found.len(), count);
        for product in found {
            assert_eq!(product.available, available);
        }
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let db = setup().await;
        let repo = db.products();

        let products = create_batch(&repo, 10).await;
        let category = products[0].category;
        let count = products.iter().filter(|p| p.category == category).count();

        let found = repo.find_by_category(category).await.unwrap();
        assert_eq!(found.len(), count);
        for product in found {
            assert_eq!(product.category, category);
        }
    }

    #[tokio::test]
    async fn test_find_by_price() {
        let db = setup().await;
        let repo = db.products();

        let products = create_batch(&repo, 10).await;
        let price = products[0].price;
        let count = products.iter().filter(|p| p.price == price).count();

        let found = repo.find_by_price(price).await.unwrap();
        assert_eq!(found.len(), count);
        for product in found {
            assert_eq!(product.price, price);
        }
    }

    #[tokio::test]
    async fn test_find_by_price_str_normalizes_input() {
        let db = setup().await;
        let repo = db.products();

        let mut product = make_product(0);
        product.price = Price::from_cents(1222);
        repo.create(&mut product).await.unwrap();

        let plain = repo.find_by_price(Price::from_cents(1222)).await.unwrap();
        let from_str = repo.find_by_price_str("12.22").await.unwrap();
        let quoted = repo.find_by_price_str(" \"12.22\" ").await.unwrap();

        assert_eq!(plain.len(), 1);
        assert_eq!(from_str, plain);
        assert_eq!(quoted, plain);
    }

    #[tokio::test]
    async fn test_find_by_price_str_rejects_malformed_input() {
        let db = setup().await;
        let repo = db.products();

        let err = repo.find_by_price_str("twelve dollars").await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(DataValidationError::InvalidPrice(_))
        ));
    }

    #[tokio::test]
    async fn test_create_from_deserialized_mapping() {
        let db = setup().await;
        let repo = db.products();

        let mut product = Product::deserialize(&json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.50",
            "available": true,
            "category": "CLOTHS",
        }))
        .unwrap();

        repo.create(&mut product).await.unwrap();
        let id = product.id.unwrap();

        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found, product);

        let data = found.serialize();
        assert_eq!(data["id"], id);
        assert_eq!(data["price"], "12.50");
        assert_eq!(data["category"], "CLOTHS");
    }
}
