//! User repository
//!
//! CRUD plus filtered/sorted/paginated listing. Sort identifiers are
//! mapped through a fixed allow-list before they reach the SQL string;
//! everything a client sends is bound as a parameter.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::models::{NewUser, Pagination, UserPatch};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Columns a client may sort the listing by.
///
/// Anything outside the allow-list falls back to `Name`. The previous
/// API also accepted "age", but no such column exists; it now takes the
/// same fallback as any other unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Email,
    CreatedAt,
}

impl SortColumn {
    /// Map client input to a column, falling back to `Name`.
    pub fn parse(s: &str) -> Self {
        match s {
            "email" => Self::Email,
            "created_at" => Self::CreatedAt,
            _ => Self::Name,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction, ascending unless "desc" is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive parse with ascending fallback.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Requested ordering for the user listing
#[derive(Debug, Clone, Copy)]
pub struct UserSort {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl UserSort {
    /// Build from raw query input. A sort is only requested when
    /// `sort_by` is present; the direction falls back to ascending.
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Option<Self> {
        sort_by.map(|column| Self {
            column: SortColumn::parse(column),
            order: sort_order.map(SortOrder::parse).unwrap_or_default(),
        })
    }
}

/// Parameters for the list operation
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub page: Pagination,
    /// Case-insensitive substring filter on name
    pub name: Option<String>,
    pub sort: Option<UserSort>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List users with optional filter, sort, and pagination.
    ///
    /// Zero matches is an empty vec, not an error.
    pub async fn list(&self, query: &UserListQuery) -> Result<Vec<User>, DbError> {
        let (column, direction) = match query.sort {
            Some(sort) => (sort.column.as_sql(), sort.order.as_sql()),
            // No requested sort: keep pages stable with the id sequence
            None => ("id", "ASC"),
        };

        // Both identifiers are allow-listed &'static strs; client input
        // only ever enters through the binds.
        let sql = format!(
            "SELECT id, name, email, created_at \
             FROM users \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
             ORDER BY {column} {direction} \
             LIMIT $2 OFFSET $3"
        );

        let users = sqlx::query_as::<_, User>(&sql)
            .bind(query.name.as_deref())
            .bind(i64::from(query.page.limit()))
            .bind(query.page.offset() as i64)
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    /// Insert a validated user, returning the generated id.
    pub async fn create(&self, user: NewUser) -> Result<i32, DbError> {
        let row: (i32,) =
            sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind(user.name.as_str())
                .bind(user.email.as_str())
                .fetch_one(self.pool)
                .await?;

        Ok(row.0)
    }

    /// Apply a partial update, returning the updated row.
    ///
    /// Absent fields keep their stored value (COALESCE), so a patch with
    /// only an email leaves the name unchanged.
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email)
            WHERE id = $3
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(patch.name.as_ref().map(|n| n.as_str()))
        .bind(patch.email.as_ref().map(|e| e.as_str()))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })
    }

    /// Delete a user, returning the row's last-known state.
    pub async fn delete(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = $1 RETURNING id, name, email, created_at",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::{UserEmail, UserName};

    #[test]
    fn sort_column_allow_list() {
        assert_eq!(SortColumn::parse("name"), SortColumn::Name);
        assert_eq!(SortColumn::parse("email"), SortColumn::Email);
        assert_eq!(SortColumn::parse("created_at"), SortColumn::CreatedAt);

        // Unknown columns fall back to name
        assert_eq!(SortColumn::parse("invalidColumn"), SortColumn::Name);
        assert_eq!(SortColumn::parse("age"), SortColumn::Name);
        assert_eq!(SortColumn::parse("id; DROP TABLE users"), SortColumn::Name);
    }

    #[test]
    fn sort_order_parse() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn sort_only_when_requested() {
        assert!(UserSort::from_params(None, Some("desc")).is_none());

        let sort = UserSort::from_params(Some("email"), None).unwrap();
        assert_eq!(sort.column, SortColumn::Email);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p shopd-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");
        pool
    }

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: UserName::new(name).expect("valid name"),
            email: UserEmail::new(email).expect("valid email"),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_roundtrip() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let id = repo
            .create(new_user("Al", "al@roundtrip.example"))
            .await
            .expect("create failed");

        let user = repo.get(id).await.expect("get failed");
        assert_eq!(user.name, "Al");
        assert_eq!(user.email, "al@roundtrip.example");

        repo.delete(id).await.expect("cleanup failed");
        let err = repo.get(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_with_only_email_keeps_name() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let id = repo
            .create(new_user("Anna", "anna@patch.example"))
            .await
            .expect("create failed");

        let patch = UserPatch {
            email: Some(UserEmail::new("anna2@patch.example").expect("valid email")),
            ..Default::default()
        };
        let user = repo.update(id, patch).await.expect("update failed");
        assert_eq!(user.name, "Anna");
        assert_eq!(user.email, "anna2@patch.example");

        repo.delete(id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn mutations_on_missing_id_are_not_found() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let err = repo.update(i32::MAX, UserPatch::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = repo.delete(i32::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_filters_and_paginates() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let mut ids = Vec::new();
        for name in ["Anna", "Joann", "Bob"] {
            let email = format!("{}@list.example", name.to_lowercase());
            ids.push(
                repo.create(new_user(name, &email))
                    .await
                    .expect("create failed"),
            );
        }

        // Substring filter is case-insensitive
        let query = UserListQuery {
            name: Some("ann".into()),
            ..Default::default()
        };
        let users = repo.list(&query).await.expect("list failed");
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert!(names.contains(&"Anna"));
        assert!(names.contains(&"Joann"));
        assert!(!names.contains(&"Bob"));

        // A one-row page skips earlier rows
        let query = UserListQuery {
            page: Pagination::new(2, 1),
            name: Some("ann".into()),
            sort: UserSort::from_params(Some("name"), None),
        };
        let users = repo.list(&query).await.expect("list failed");
        assert_eq!(users.len(), 1);

        for id in ids {
            repo.delete(id).await.expect("cleanup failed");
        }
    }
}
