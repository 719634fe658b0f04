// src/models/monitoring.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::Collection,
    models::record::{not_blank, NewRecord, Resource, ResourceKind},
};

// ---
// 1. Monitoramento de Água (coleta de amostras)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WaterMonitoring {
    pub id: Uuid,
    pub location: String,
    pub collection_date: String,
    pub ph_level: f64,
    pub turbidity: f64,
    pub dissolved_oxygen: f64,
    pub temperature: f64,
    pub conductivity: f64,
    pub status: String,
    pub observations: Option<String>,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for WaterMonitoring {
    const COLLECTION: Collection = Collection::WaterMonitoring;
    const KIND: ResourceKind = ResourceKind::WaterMonitoring;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWaterMonitoringPayload {
    #[schema(example = "Ponto P1 - Montante")]
    pub location: String,
    #[schema(example = "2024-08-10")]
    pub collection_date: String,
    #[schema(example = 7.2)]
    pub ph_level: f64,
    pub turbidity: f64,
    pub dissolved_oxygen: f64,
    pub temperature: f64,
    pub conductivity: f64,
    #[schema(example = "Conforme")]
    pub status: String,
    #[serde(default)]
    pub observations: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub tenant_id: String,
}

impl NewRecord for CreateWaterMonitoringPayload {
    type Record = WaterMonitoring;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> WaterMonitoring {
        WaterMonitoring {
            id,
            location: self.location,
            collection_date: self.collection_date,
            ph_level: self.ph_level,
            turbidity: self.turbidity,
            dissolved_oxygen: self.dissolved_oxygen,
            temperature: self.temperature,
            conductivity: self.conductivity,
            status: self.status,
            observations: self.observations,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}

// ---
// 2. Gestão de Resíduos
// ---
// classification: Classe I, IIA, IIB. mtr_number: Manifesto de Transporte de Resíduos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WasteManagement {
    pub id: Uuid,
    pub waste_type: String,
    pub classification: String,
    pub quantity: f64,
    pub unit: String,
    pub collection_date: String,
    pub destination: String,
    pub transport_company: String,
    pub mtr_number: String,
    pub status: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for WasteManagement {
    const COLLECTION: Collection = Collection::WasteManagement;
    const KIND: ResourceKind = ResourceKind::WasteManagement;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWasteManagementPayload {
    #[schema(example = "Borra oleosa")]
    pub waste_type: String,
    #[schema(example = "Classe I")]
    pub classification: String,
    pub quantity: f64,
    #[schema(example = "t")]
    pub unit: String,
    pub collection_date: String,
    pub destination: String,
    pub transport_company: String,
    pub mtr_number: String,
    pub status: String,

    #[validate(custom(function = "not_blank"))]
    pub tenant_id: String,
}

impl NewRecord for CreateWasteManagementPayload {
    type Record = WasteManagement;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> WasteManagement {
        WasteManagement {
            id,
            waste_type: self.waste_type,
            classification: self.classification,
            quantity: self.quantity,
            unit: self.unit,
            collection_date: self.collection_date,
            destination: self.destination,
            transport_company: self.transport_company,
            mtr_number: self.mtr_number,
            status: self.status,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}
