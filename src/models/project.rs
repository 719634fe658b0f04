// src/models/project.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::extract::empty_as_none,
    db::{Collection, Filter},
    models::record::{not_blank, NewRecord, RecordFilter, Resource, ResourceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProjectStatus {
    #[serde(rename = "Planejamento")]
    Planning,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Suspenso")]
    Suspended,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planejamento",
            ProjectStatus::InProgress => "Em Andamento",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::Suspended => "Suspenso",
            ProjectStatus::Cancelled => "Cancelado",
        }
    }
}

// Orçamento negativo é aceito; não há regra de negócio sobre valores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: String,
    pub end_date: Option<String>,
    pub budget: f64,
    pub manager: String,
    pub location: String,
    pub environmental_impact: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for Project {
    const COLLECTION: Collection = Collection::Projects;
    const KIND: ResourceKind = ResourceKind::Project;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProjectPayload {
    #[schema(example = "Recuperação de Mata Ciliar - Rio Tietê")]
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    #[schema(example = "2024-03-01")]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[schema(example = 2500000.0)]
    pub budget: f64,
    pub manager: String,
    pub location: String,
    pub environmental_impact: String,

    #[validate(custom(function = "not_blank"))]
    pub tenant_id: String,
}

impl NewRecord for CreateProjectPayload {
    type Record = Project;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            manager: self.manager,
            location: self.location,
            environmental_impact: self.environmental_impact,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<ProjectStatus>,
}

impl RecordFilter for ProjectFilter {
    fn apply(&self, filter: Filter) -> Filter {
        filter.eq_opt("status", self.status.map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_strings_keep_accents_and_spaces() {
        assert_eq!(
            serde_json::from_value::<ProjectStatus>(json!("Em Andamento")).unwrap(),
            ProjectStatus::InProgress
        );
        assert_eq!(
            serde_json::to_value(ProjectStatus::Completed).unwrap(),
            json!(ProjectStatus::Completed.as_str())
        );
        assert!(serde_json::from_value::<ProjectStatus>(json!("InProgress")).is_err());
    }

    #[test]
    fn negative_budget_is_accepted() {
        let payload: CreateProjectPayload = serde_json::from_value(json!({
            "name": "Projeto",
            "description": "desc",
            "status": "Planejamento",
            "start_date": "2024-01-01",
            "budget": -10.5,
            "manager": "Ana",
            "location": "SP",
            "environmental_impact": "baixo",
            "tenant_id": "t1"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        let project = payload.into_record(Uuid::new_v4(), Utc::now());
        assert_eq!(project.budget, -10.5);
        assert_eq!(project.end_date, None);
    }
}
