// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    db::Collection,
    models::record::{Resource, ResourceKind},
};

// Usuário do tenant. Só o modelo existe: não há rotas nem autenticação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for User {
    const COLLECTION: Collection = Collection::Users;
    const KIND: ResourceKind = ResourceKind::User;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}
