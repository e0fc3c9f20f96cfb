mod common;

use std::sync::Arc;

use domain_order::{
    mock::{
        MockChecklistRepo, MockFacilityRepo, MockLocationRepo, MockOrderStatusRepo,
        MockOrderTypeRepo, MockUserRepo, MockUtilityRepo,
    },
    model::{
        entity::Facility,
        vo::{DatabaseTranslation, ReferenceSet, UtilityScope},
    },
    service::ReferenceDataService,
};
use mockall::predicate::*;
use service_order::ReferenceDataServiceImpl;

struct Repos {
    order_type: MockOrderTypeRepo,
    order_status: MockOrderStatusRepo,
    facility: MockFacilityRepo,
    checklist: MockChecklistRepo,
    location: MockLocationRepo,
    utility: MockUtilityRepo,
    user: MockUserRepo,
}

impl Repos {
    fn new() -> Self {
        let mut order_type = MockOrderTypeRepo::new();
        order_type
            .expect_get_all_order_types()
            .returning(|_, translation| Ok(common::order_types().translate(translation)));
        let mut order_status = MockOrderStatusRepo::new();
        order_status
            .expect_get_all_order_statuses()
            .returning(|_, _| Ok(common::order_statuses()));
        let mut location = MockLocationRepo::new();
        location.expect_get_all_locations().returning(|| Ok(ReferenceSet::empty()));
        let mut user = MockUserRepo::new();
        user.expect_get_all_technicians().returning(|| Ok(ReferenceSet::empty()));
        Self {
            order_type,
            order_status,
            facility: MockFacilityRepo::new(),
            checklist: MockChecklistRepo::new(),
            location,
            utility: MockUtilityRepo::new(),
            user,
        }
    }

    fn build(self) -> ReferenceDataServiceImpl {
        ReferenceDataServiceImpl::builder()
            .order_type_repo(Arc::new(self.order_type))
            .order_status_repo(Arc::new(self.order_status))
            .facility_repo(Arc::new(self.facility))
            .checklist_repo(Arc::new(self.checklist))
            .location_repo(Arc::new(self.location))
            .utility_repo(Arc::new(self.utility))
            .user_repo(Arc::new(self.user))
            .build()
    }
}

#[tokio::test]
async fn test_global_scope_skips_facilities_and_checklists() {
    let mut repos = Repos::new();
    repos.facility.expect_get_all_facilities().never();
    repos.checklist.expect_get_all_checklists().never();
    let service = repos.build();

    let references = service
        .form_references(&UtilityScope::Global, &DatabaseTranslation::default())
        .await
        .unwrap();

    assert!(references.facilities.is_empty());
    assert!(references.checklists.is_empty());
    assert_eq!(references.order_types.len(), 2);
}

#[tokio::test]
async fn test_utility_scope_fetches_facilities() {
    let scope = UtilityScope::new([1]);
    let mut repos = Repos::new();
    repos
        .facility
        .expect_get_all_facilities()
        .with(eq(scope.clone()))
        .times(1)
        .returning(|_| {
            Ok(ReferenceSet::new(vec![Facility {
                facility_id: 3,
                ean: 735999000000000017,
                address: "Storgatan 1".to_string(),
                utility_id: Some(1),
            }]))
        });
    repos
        .checklist
        .expect_get_all_checklists()
        .times(1)
        .returning(|_| Ok(ReferenceSet::empty()));
    let service = repos.build();

    let references = service
        .form_references(&scope, &DatabaseTranslation::default())
        .await
        .unwrap();

    assert_eq!(references.facilities.ids(), vec![3]);
}

#[tokio::test]
async fn test_order_types_translated() {
    let service = Repos::new().build();

    let order_types = service
        .get_order_types(&UtilityScope::Global, &common::bundle().database)
        .await
        .unwrap();

    assert_eq!(order_types.display_row(&1).as_deref(), Some("Mätarbyte"));
    assert_eq!(order_types.display_row(&3).as_deref(), Some("Sealing"));
}

#[tokio::test]
async fn test_repository_error_propagates() {
    let mut repos = Repos::new();
    repos
        .utility
        .expect_get_all_utilities()
        .returning(|_| Err(anyhow::anyhow!("relation \"utility\" does not exist")));
    let service = repos.build();

    let result = service.get_utilities(&DatabaseTranslation::default()).await;

    assert!(result.is_err());
}
