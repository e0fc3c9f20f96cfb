use std::sync::Arc;

use async_trait::async_trait;
use domain_order::{
    model::{
        entity::{Checklist, Facility, OrderStatus, OrderType, Utility},
        vo::{
            create_translation_mapping, DatabaseTranslation, FormReferences, ReferenceSet,
            UtilityScope,
        },
    },
    repository::{
        ChecklistRepo, FacilityRepo, LocationRepo, OrderStatusRepo, OrderTypeRepo, UserRepo,
        UtilityRepo,
    },
    service::ReferenceDataService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ReferenceDataServiceImpl {
    order_type_repo: Arc<dyn OrderTypeRepo>,
    order_status_repo: Arc<dyn OrderStatusRepo>,
    facility_repo: Arc<dyn FacilityRepo>,
    checklist_repo: Arc<dyn ChecklistRepo>,
    location_repo: Arc<dyn LocationRepo>,
    utility_repo: Arc<dyn UtilityRepo>,
    user_repo: Arc<dyn UserRepo>,
}

impl ReferenceDataServiceImpl {
    async fn get_facilities(&self, scope: &UtilityScope) -> anyhow::Result<ReferenceSet<Facility>> {
        if scope.is_global() {
            return Ok(ReferenceSet::empty());
        }
        self.facility_repo.get_all_facilities(scope).await
    }

    async fn get_checklists(
        &self,
        scope: &UtilityScope,
    ) -> anyhow::Result<ReferenceSet<Checklist>> {
        if scope.is_global() {
            return Ok(ReferenceSet::empty());
        }
        self.checklist_repo.get_all_checklists(scope).await
    }
}

#[async_trait]
impl ReferenceDataService for ReferenceDataServiceImpl {
    async fn form_references(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<FormReferences> {
        let (
            order_types,
            order_statuses,
            facilities,
            locations,
            checklists,
            technicians,
        ) = tokio::try_join!(
            self.get_order_types(scope, translation),
            self.get_order_statuses(scope, translation),
            self.get_facilities(scope),
            self.location_repo.get_all_locations(),
            self.get_checklists(scope),
            self.user_repo.get_all_technicians(),
        )?;
        Ok(FormReferences {
            order_types,
            order_statuses,
            facilities,
            locations,
            checklists,
            technicians,
        })
    }

    async fn get_utilities(
        &self,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<Utility>> {
        let mapping = create_translation_mapping(&translation.utility);
        self.utility_repo.get_all_utilities(&mapping).await
    }

    async fn get_order_types(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<OrderType>> {
        let mapping = create_translation_mapping(&translation.order_type);
        self.order_type_repo.get_all_order_types(scope, &mapping).await
    }

    async fn get_order_statuses(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<OrderStatus>> {
        let mapping = create_translation_mapping(&translation.order_status);
        self.order_status_repo.get_all_order_statuses(scope, &mapping).await
    }
}
