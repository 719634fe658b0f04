// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::{bail, Context};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{
    db::{DashboardRepository, DocumentStore, MemoryDocumentStore, PgDocumentStore},
    models::{
        commitment::Commitment,
        inspection::Inspection,
        license::License,
        monitoring::{WasteManagement, WaterMonitoring},
        project::Project,
    },
    services::{DashboardService, RecordService, SeedService},
};

const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

// ---
// Configuração (variáveis de ambiente / .env)
// ---
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub server_addr: String,
    pub cors_origins: CorsOrigins,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {raw}"))?,
            None => 5,
        };

        let db_acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS inválido: {raw}"))?,
            ),
            None => Duration::from_secs(3),
        };

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS").as_deref().unwrap_or("*"))?;

        Ok(Self {
            database_url,
            db_max_connections,
            db_acquire_timeout,
            server_addr,
            cors_origins,
        })
    }

    // Qualquer origem, com credenciais. O tower-http não aceita `*` + credenciais,
    // então a origem da requisição é espelhada.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            CorsOrigins::Any => CorsLayer::very_permissive(),
            CorsOrigins::List(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.clone()))
                .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        }
    }
}

fn parse_cors_origins(raw: &str) -> anyhow::Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    let values = origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("origem CORS inválida: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsOrigins::List(values))
}

/// Cria o store a partir da URL: `memory://` ou uma URL do Postgres (com migrações).
pub async fn connect_store(settings: &Settings) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let url = settings.database_url.as_str();

    if url.starts_with(MEMORY_URL_SCHEME) {
        tracing::warn!("⚠️ Usando armazenamento em memória: os dados somem ao reiniciar");
        return Ok(Arc::new(MemoryDocumentStore::new()));
    }

    if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        bail!("DATABASE_URL não suportada (use postgres:// ou memory://)");
    }

    let store = PgDocumentStore::connect(url, settings.db_max_connections, settings.db_acquire_timeout)
        .await
        .context("Falha ao conectar ao banco de dados")?;
    store
        .migrate()
        .await
        .context("Falha ao rodar as migrações do banco de dados")?;

    Ok(Arc::new(store))
}

// O estado compartilhado que será acessível em toda a aplicação.
// O store é criado uma vez no startup e injetado aqui; não há handle global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub license_service: RecordService<License>,
    pub project_service: RecordService<Project>,
    pub inspection_service: RecordService<Inspection>,
    pub water_service: RecordService<WaterMonitoring>,
    pub waste_service: RecordService<WasteManagement>,
    pub commitment_service: RecordService<Commitment>,
    pub dashboard_service: DashboardService,
    pub seed_service: SeedService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let store = connect_store(settings).await?;
        Ok(Self::with_store(store))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            license_service: RecordService::from_store(Arc::clone(&store)),
            project_service: RecordService::from_store(Arc::clone(&store)),
            inspection_service: RecordService::from_store(Arc::clone(&store)),
            water_service: RecordService::from_store(Arc::clone(&store)),
            waste_service: RecordService::from_store(Arc::clone(&store)),
            commitment_service: RecordService::from_store(Arc::clone(&store)),
            dashboard_service: DashboardService::new(DashboardRepository::new(Arc::clone(&store))),
            seed_service: SeedService::new(Arc::clone(&store)),
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_is_required() {
        let err = settings(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn defaults_are_applied() {
        let s = settings(&[("DATABASE_URL", "memory://")]).unwrap();
        assert_eq!(s.db_max_connections, 5);
        assert_eq!(s.db_acquire_timeout, Duration::from_secs(3));
        assert_eq!(s.server_addr, "0.0.0.0:3000");
        assert_eq!(s.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn cors_origins_are_parsed() {
        let s = settings(&[
            ("DATABASE_URL", "memory://"),
            ("CORS_ORIGINS", "http://localhost:3000, https://gaia.example"),
        ])
        .unwrap();
        assert_eq!(
            s.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://gaia.example"),
            ])
        );

        let s = settings(&[("DATABASE_URL", "memory://"), ("CORS_ORIGINS", "*")]).unwrap();
        assert_eq!(s.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn invalid_numbers_fail_startup() {
        assert!(settings(&[("DATABASE_URL", "memory://"), ("DB_MAX_CONNECTIONS", "muitas")]).is_err());
    }

    #[tokio::test]
    async fn unsupported_urls_are_rejected() {
        let s = settings(&[("DATABASE_URL", "mongodb://localhost")]).unwrap();
        assert!(connect_store(&s).await.is_err());

        let s = settings(&[("DATABASE_URL", "memory://")]).unwrap();
        assert!(connect_store(&s).await.is_ok());
    }
}
