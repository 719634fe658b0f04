// src/models/inspection.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::extract::empty_as_none,
    db::{Collection, Filter},
    models::record::{not_blank, NewRecord, RecordFilter, Resource, ResourceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InspectionStatus {
    #[serde(rename = "Agendada")]
    Scheduled,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluída")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl InspectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionStatus::Scheduled => "Agendada",
            InspectionStatus::InProgress => "Em Andamento",
            InspectionStatus::Completed => "Concluída",
            InspectionStatus::Cancelled => "Cancelada",
        }
    }
}

// Item do checklist: (item, situação, evidência). A ordem da lista é preservada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    #[schema(example = "Funcionamento da ETE")]
    pub item: String,
    #[schema(example = "Conforme")]
    pub status: String,
    #[serde(default)]
    pub evidence: String,
}

// A conformidade é informada pelo inspetor, não é calculada a partir do checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Inspection {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub scheduled_date: String,
    pub inspector: String,
    pub status: InspectionStatus,
    #[serde(default)]
    pub conformity_percentage: f64,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItem>,
    pub observations: Option<String>,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for Inspection {
    const COLLECTION: Collection = Collection::Inspections;
    const KIND: ResourceKind = ResourceKind::Inspection;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

// `null` e ausente valem 0
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInspectionPayload {
    #[schema(example = "Vistoria Trimestral - Tratamento de Efluentes")]
    pub title: String,
    pub location: String,
    #[schema(example = "2024-07-20")]
    pub scheduled_date: String,
    pub inspector: String,
    pub status: InspectionStatus,
    #[serde(default, deserialize_with = "null_as_zero")]
    #[schema(example = 87.5)]
    pub conformity_percentage: f64,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItem>,
    #[serde(default)]
    pub observations: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub tenant_id: String,
}

impl NewRecord for CreateInspectionPayload {
    type Record = Inspection;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Inspection {
        Inspection {
            id,
            title: self.title,
            location: self.location,
            scheduled_date: self.scheduled_date,
            inspector: self.inspector,
            status: self.status,
            conformity_percentage: self.conformity_percentage,
            checklist_items: self.checklist_items,
            observations: self.observations,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InspectionFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<InspectionStatus>,
}

impl RecordFilter for InspectionFilter {
    fn apply(&self, filter: Filter) -> Filter {
        filter.eq_opt("status", self.status.map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let payload: CreateInspectionPayload = serde_json::from_value(json!({
            "title": "Vistoria",
            "location": "SP",
            "scheduled_date": "2024-07-20",
            "inspector": "João",
            "status": "Agendada",
            "tenant_id": "t1"
        }))
        .unwrap();

        assert_eq!(payload.conformity_percentage, 0.0);
        assert!(payload.checklist_items.is_empty());
    }

    #[test]
    fn null_percentage_counts_as_zero() {
        let payload: CreateInspectionPayload = serde_json::from_value(json!({
            "title": "Vistoria",
            "location": "SP",
            "scheduled_date": "2024-07-20",
            "inspector": "João",
            "status": "Agendada",
            "conformity_percentage": null,
            "tenant_id": "t1"
        }))
        .unwrap();
        assert_eq!(payload.conformity_percentage, 0.0);

        let err = serde_json::from_value::<CreateInspectionPayload>(json!({
            "title": "Vistoria",
            "location": "SP",
            "scheduled_date": "2024-07-20",
            "inspector": "João",
            "status": "Agendada",
            "conformity_percentage": "alta",
            "tenant_id": "t1"
        }));
        assert!(err.is_err());
    }

    #[test]
    fn checklist_order_and_out_of_range_percentage_are_kept() {
        let payload: CreateInspectionPayload = serde_json::from_value(json!({
            "title": "Vistoria",
            "location": "SP",
            "scheduled_date": "2024-07-20",
            "inspector": "João",
            "status": "Concluída",
            "conformity_percentage": 140.0,
            "checklist_items": [
                { "item": "A", "status": "Conforme", "evidence": "foto.jpg" },
                { "item": "B", "status": "Não Conforme" }
            ],
            "tenant_id": "t1"
        }))
        .unwrap();

        let inspection = payload.into_record(Uuid::new_v4(), Utc::now());
        assert_eq!(inspection.conformity_percentage, 140.0);
        let items: Vec<_> = inspection.checklist_items.iter().map(|c| c.item.as_str()).collect();
        assert_eq!(items, ["A", "B"]);
        assert_eq!(inspection.checklist_items[1].evidence, "");
    }
}
