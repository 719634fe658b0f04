// src/models/commitment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::Collection,
    models::record::{not_blank, NewRecord, Resource, ResourceKind},
};

// Compromissos / condicionantes. status e priority são texto livre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Commitment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub responsible: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub progress: i64,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for Commitment {
    const COLLECTION: Collection = Collection::Commitments;
    const KIND: ResourceKind = ResourceKind::Commitment;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommitmentPayload {
    #[schema(example = "Entregar relatório de automonitoramento")]
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub responsible: String,
    pub status: String,
    #[schema(example = "Alta")]
    pub priority: String,
    #[serde(default)]
    pub progress: i64,

    #[validate(custom(function = "not_blank"))]
    pub tenant_id: String,
}

impl NewRecord for CreateCommitmentPayload {
    type Record = Commitment;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Commitment {
        Commitment {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            responsible: self.responsible,
            status: self.status,
            priority: self.priority,
            progress: self.progress,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}
