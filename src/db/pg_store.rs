// src/db/pg_store.rs

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};

use super::store::{required_str, Collection, DocumentStore, Filter, StoreError};

// ---
// Store de documentos sobre Postgres
// ---
// Cada coleção é uma tabela (id, tenant_id, doc JSONB, inserted_at).
// O tenant vai na coluna indexada ($1); as demais igualdades viram "containment"
// de JSONB ($2): `doc @> '{"status": "..."}'`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(Self { pool })
    }

    /// Cria as tabelas das coleções (idempotente).
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
        Ok(())
    }
}

// --- SQL por coleção ---

const TENANT_AND_DOC: &str = "tenant_id = $1 AND doc @> $2";

fn insert_sql(collection: Collection) -> String {
    format!(
        "INSERT INTO {} (id, tenant_id, doc) VALUES ($1, $2, $3)",
        collection.name()
    )
}

fn find_sql(collection: Collection) -> String {
    format!(
        "SELECT doc FROM {} WHERE {TENANT_AND_DOC} ORDER BY inserted_at ASC, id ASC LIMIT $3",
        collection.name()
    )
}

fn find_one_sql(collection: Collection) -> String {
    format!(
        "SELECT doc FROM {} WHERE {TENANT_AND_DOC} ORDER BY inserted_at ASC, id ASC LIMIT 1",
        collection.name()
    )
}

fn count_sql(collection: Collection) -> String {
    format!("SELECT COUNT(*) FROM {} WHERE {TENANT_AND_DOC}", collection.name())
}

fn delete_sql(collection: Collection) -> String {
    format!("DELETE FROM {} WHERE {TENANT_AND_DOC}", collection.name())
}

// Converte violação de chave única em um erro mais amigável
fn map_insert_error(e: sqlx::Error, id: &str) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateKey(id.to_string());
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError> {
        let id = required_str(&doc, "id")?;
        let tenant_id = required_str(&doc, "tenant_id")?;

        sqlx::query(&insert_sql(collection))
            .bind(id)
            .bind(tenant_id)
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, id))?;

        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        docs: Vec<Value>,
    ) -> Result<u64, StoreError> {
        let sql = insert_sql(collection);

        // O lote é gravado inteiro ou nada
        let mut tx = self.pool.begin().await?;
        for doc in &docs {
            let id = required_str(doc, "id")?;
            let tenant_id = required_str(doc, "tenant_id")?;
            sqlx::query(&sql)
                .bind(id)
                .bind(tenant_id)
                .bind(Json(doc))
                .execute(&mut *tx)
                .await
                .map_err(|e| map_insert_error(e, id))?;
        }
        tx.commit().await?;

        Ok(docs.len() as u64)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<Json<Value>> = sqlx::query_scalar(&find_sql(collection))
            .bind(filter.tenant_id())
            .bind(Json(filter.to_document()))
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let row: Option<Json<Value>> = sqlx::query_scalar(&find_one_sql(collection))
            .bind(filter.tenant_id())
            .bind(Json(filter.to_document()))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar(&count_sql(collection))
            .bind(filter.tenant_id())
            .bind(Json(filter.to_document()))
            .fetch_one(&self.pool)
            .await?;

        Ok(total.max(0) as u64)
    }

    async fn delete_many(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(&delete_sql(collection))
            .bind(filter.tenant_id())
            .bind(Json(filter.to_document()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{borrow::Cow, error::Error as StdError, fmt};

    use serde_json::json;
    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "erro simulado (unique: {})", self.unique)
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "erro simulado"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            None
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    #[test]
    fn unique_violations_become_duplicate_keys() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        assert!(matches!(map_insert_error(err, "abc"), StoreError::DuplicateKey(id) if id == "abc"));

        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(matches!(map_insert_error(err, "abc"), StoreError::Database(_)));

        assert!(matches!(
            map_insert_error(sqlx::Error::RowNotFound, "abc"),
            StoreError::Database(_)
        ));
    }

    #[test]
    fn every_query_targets_its_table_and_the_tenant_column() {
        for collection in Collection::ALL {
            let table = collection.name();
            assert_eq!(
                insert_sql(collection),
                format!("INSERT INTO {table} (id, tenant_id, doc) VALUES ($1, $2, $3)")
            );
            for sql in [
                find_sql(collection),
                find_one_sql(collection),
                count_sql(collection),
                delete_sql(collection),
            ] {
                assert!(
                    sql.contains(&format!("FROM {table} WHERE tenant_id = $1 AND doc @> $2")),
                    "{sql}"
                );
            }
        }
        assert!(find_sql(Collection::Licenses).ends_with("LIMIT $3"));
        assert!(find_one_sql(Collection::Licenses).ends_with("LIMIT 1"));
    }

    #[test]
    fn filters_bind_tenant_and_containment_document() {
        let filter = Filter::tenant("t1").eq("status", "Ativa").eq("type", "LP");
        assert_eq!(filter.tenant_id(), "t1");
        assert_eq!(
            filter.to_document(),
            json!({ "tenant_id": "t1", "status": "Ativa", "type": "LP" })
        );
    }
}
