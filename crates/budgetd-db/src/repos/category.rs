//! Category repository

use budgetd_types::{generate_id, Category};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{DbCategory, DbResult};

pub struct CategoryRepo {
    pool: SqlitePool,
}

impl CategoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new category. Names are not required to be unique.
    pub async fn create(&self, name: &str, emoji: Option<&str>) -> DbResult<Category> {
        let row = sqlx::query_as::<_, DbCategory>(
            r#"
            INSERT INTO categories (id, name, emoji, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, emoji, created_at
            "#
        )
        .bind(generate_id())
        .bind(name)
        .bind(emoji)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(category_id = %row.id, name = %row.name, "Category created");
        Ok(row.into())
    }

    /// All categories in creation order
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, DbCategory>(
            "SELECT id, name, emoji, created_at FROM categories ORDER BY rowid"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let row = sqlx::query_as::<_, DbCategory>(
            "SELECT id, name, emoji, created_at FROM categories WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Ids from `ids` that match no stored category
    pub async fn missing_ids<'a>(&self, ids: &[&'a str]) -> DbResult<Vec<&'a str>> {
        let mut missing = Vec::new();
        for id in ids {
            if !self.exists(id).await? {
                missing.push(*id);
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[tokio::test]
    async fn test_create_and_list() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.category_repo();

        let food = repo.create("Food", Some("🍔")).await.unwrap();
        let rent = repo.create("Rent", None).await.unwrap();

        assert_eq!(food.name, "Food");
        assert_eq!(food.emoji.as_deref(), Some("🍔"));
        assert_ne!(food.id, rent.id);

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![food, rent]);
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.category_repo();

        repo.create("Food", None).await.unwrap();
        repo.create("Food", None).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_and_exists() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = db.category_repo();
        let food = repo.create("Food", None).await.unwrap();

        assert_eq!(repo.find_by_id(&food.id).await.unwrap(), Some(food.clone()));
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
        assert!(repo.exists(&food.id).await.unwrap());
        assert!(!repo.exists("nope").await.unwrap());

        let missing = repo.missing_ids(&[food.id.as_str(), "nope"]).await.unwrap();
        assert_eq!(missing, vec!["nope"]);
    }
}
